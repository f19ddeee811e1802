//! Anomaly model types.

mod alert;
mod assessment;

pub use alert::Alert;
pub use assessment::{AnomalyAssessment, AnomalySeverity};
