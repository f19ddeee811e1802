//! Anomaly contracts.

mod assessor;

pub use assessor::{AnomalyAssessor, MonitoringStream};
