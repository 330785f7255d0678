//! Tests for AirbookError type

use super::*;

#[test]
fn test_validation_error_display() {
    let error = AirbookError::Validation("booking reference is empty".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid input"));
    assert!(msg.contains("booking reference is empty"));
}

#[test]
fn test_api_error_wraps_status() {
    let error = AirbookError::from(ApiError::Status { code: 503 });
    assert!(matches!(error, AirbookError::Api(ApiError::Status { code: 503 })));
    assert!(error.to_string().contains("503"));
}

#[test]
fn test_config_error_display() {
    let error = AirbookError::from(ConfigError::Parse("expected `=`".to_string()));
    let msg = error.to_string();
    assert!(msg.contains("Configuration error"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = AirbookError::from(io_err);
    assert!(matches!(err, AirbookError::Io(_)));
    assert!(err.to_string().contains("test error"));
}
