//! Anomaly Assessment Facade
//!
//! Unified re-exports for the anomaly assessment module.
//!
//! This facade provides a single entry point to all anomaly functionality:
//! - `AnomalyAssessor` trait, `AnomalyAssessment` and `Alert` from SPI
//! - Configuration types from API
//! - `assess_anomaly`, `ZScoreAssessor`, monitoring and alerting from Core

// Re-export everything from SPI
pub use anomaly_spi::*;

// Re-export everything from API
pub use anomaly_api::*;

// Re-export everything from Core
pub use anomaly_core::*;
