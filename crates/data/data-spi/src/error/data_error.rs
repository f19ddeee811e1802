//! Data source error types.

use thiserror::Error;

/// Data source errors.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No data returned
    #[error("No data returned")]
    NoData,

    /// Non-success status from the analytics backend
    #[error("API error [{status}]: {message}")]
    ApiError { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
