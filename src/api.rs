//! Backend API access
//!
//! Defines the ApiClient used by the lookup worker and the CLI commands, and
//! the ApiError type shared by every backend call.

mod client;
mod types;

pub use client::ApiClient;
pub use types::CancelBookingResponse;

use thiserror::Error;

/// Errors that can occur while talking to the booking backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The base URL or HTTP client could not be set up
    #[error("Invalid client setup: {0}")]
    Setup(String),

    /// Network error during the request (connect, timeout, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("HTTP error! status: {code}")]
    Status { code: u16 },

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request was cancelled before it completed
    #[error("Request cancelled")]
    Cancelled,
}
