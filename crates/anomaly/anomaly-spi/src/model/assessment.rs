//! Anomaly assessment result types.

use serde::{Deserialize, Serialize};

/// Severity classification of a z-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalySeverity {
    /// |z| <= 1.5
    Normal,
    /// 1.5 < |z| <= 2.5
    Warning,
    /// |z| > 2.5
    Danger,
}

/// Result of assessing a density value against a rolling history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyAssessment {
    /// The assessed value.
    pub current: f64,
    /// Rolling mean of the history.
    pub mean: f64,
    /// Population standard deviation of the history.
    pub std_dev: f64,
    /// Standard deviations from the mean; 0 for a constant history.
    pub z_score: f64,
    /// Severity classification of `z_score`.
    pub severity: AnomalySeverity,
    /// Whether the value lies outside the normal range.
    pub is_anomalous: bool,
}

impl AnomalyAssessment {
    /// One-sigma band `[mean - std_dev, mean + std_dev]` for display.
    ///
    /// Not a confidence interval.
    pub fn normal_band(&self) -> (f64, f64) {
        (self.mean - self.std_dev, self.mean + self.std_dev)
    }
}
