//! Anomaly Assessment Service Provider Interface
//!
//! Defines traits and types for density anomaly assessment.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{AnomalyAssessor, MonitoringStream};
pub use error::{AnomalyError, Result};
pub use model::{Alert, AnomalyAssessment, AnomalySeverity};
