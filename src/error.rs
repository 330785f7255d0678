use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Top-level error type for airbook
#[derive(Debug, Error)]
pub enum AirbookError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
