//! Series alignment error types.

use thiserror::Error;

/// Series alignment errors.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("Invalid window: {reason}")]
    InvalidWindow { reason: String },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Series length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

/// Result type for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;
