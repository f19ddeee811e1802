//! Alert types for anomaly assessment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AnomalySeverity;

/// An alert raised when a monitored density is anomalous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Instant of the offending observation.
    pub timestamp: DateTime<Utc>,
    /// The anomalous density value.
    pub value: f64,
    /// Its z-score against the rolling history.
    pub z_score: f64,
    pub severity: AnomalySeverity,
    pub message: String,
}
