//! Anomaly assessor trait definitions.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::model::{Alert, AnomalyAssessment};

/// Anomaly assessor trait.
///
/// Implementations judge a current density value against a history of
/// prior samples.
pub trait AnomalyAssessor: Send + Sync {
    /// Assess `current` against `history`.
    fn assess(&self, current: f64, history: &[f64]) -> Result<AnomalyAssessment>;
}

/// Real-time monitoring trait.
pub trait MonitoringStream<A: AnomalyAssessor>: Send + Sync {
    /// Push a new sample and check for an anomaly against the buffered
    /// history.
    fn push(&mut self, timestamp: DateTime<Utc>, density: f64) -> Result<Option<Alert>>;

    /// Get current buffer contents.
    fn buffer(&self) -> &[f64];

    /// Reset the monitor state.
    fn reset(&mut self);
}
