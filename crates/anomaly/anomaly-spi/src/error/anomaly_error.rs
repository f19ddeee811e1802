//! Anomaly assessment error types.

use thiserror::Error;

/// Anomaly assessment errors.
#[derive(Debug, Error)]
pub enum AnomalyError {
    #[error("Insufficient history: required {required}, got {got}")]
    InsufficientHistory { required: usize, got: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for anomaly assessment operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;
