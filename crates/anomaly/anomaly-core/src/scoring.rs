//! Z-score anomaly scoring.

use anomaly_api::AssessorConfig;
use anomaly_spi::{AnomalyAssessment, AnomalyAssessor, AnomalyError, AnomalySeverity, Result};

/// Z-score magnitude above which a value is a warning.
pub const WARNING_Z: f64 = 1.5;
/// Z-score magnitude above which a value is dangerous.
pub const DANGER_Z: f64 = 2.5;

/// Classify a z-score against the fixed severity thresholds.
pub fn severity_for(z_score: f64) -> AnomalySeverity {
    let magnitude = z_score.abs();
    if magnitude > DANGER_Z {
        AnomalySeverity::Danger
    } else if magnitude > WARNING_Z {
        AnomalySeverity::Warning
    } else {
        AnomalySeverity::Normal
    }
}

/// Assess a density value against a history of prior samples.
///
/// Uses the population standard deviation. A zero-variance (or empty)
/// history yields `z_score = 0` and is never anomalous; a constant
/// history cannot make any value an outlier.
pub fn assess_anomaly(current: f64, history: &[f64]) -> AnomalyAssessment {
    if history.is_empty() {
        return AnomalyAssessment {
            current,
            mean: current,
            std_dev: 0.0,
            z_score: 0.0,
            severity: AnomalySeverity::Normal,
            is_anomalous: false,
        };
    }

    let n = history.len() as f64;
    let mean = history.iter().sum::<f64>() / n;
    let std_dev = (history.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();

    let z_score = if std_dev > 0.0 { (current - mean) / std_dev } else { 0.0 };
    let severity = severity_for(z_score);

    AnomalyAssessment {
        current,
        mean,
        std_dev,
        z_score,
        severity,
        is_anomalous: severity != AnomalySeverity::Normal,
    }
}

/// Classify statistics precomputed by the analytics backend.
///
/// This path only maps an existing `{mean, std_dev, z_score}` triple to a
/// severity; it never recomputes or mixes with local history. Use one
/// source of truth per chart.
pub fn classify_precomputed(
    current: f64,
    mean: f64,
    std_dev: f64,
    z_score: f64,
) -> AnomalyAssessment {
    let z_score = if std_dev > 0.0 { z_score } else { 0.0 };
    let severity = severity_for(z_score);
    AnomalyAssessment {
        current,
        mean,
        std_dev,
        z_score,
        severity,
        is_anomalous: severity != AnomalySeverity::Normal,
    }
}

/// Z-score assessor enforcing a minimum history length.
#[derive(Debug, Clone)]
pub struct ZScoreAssessor {
    min_history: usize,
}

impl ZScoreAssessor {
    /// Create an assessor requiring at least `min_history` samples.
    pub fn new(min_history: usize) -> Self {
        Self { min_history }
    }

    /// Create from configuration.
    pub fn from_config(config: AssessorConfig) -> Self {
        Self::new(config.min_history)
    }
}

impl Default for ZScoreAssessor {
    fn default() -> Self {
        Self::from_config(AssessorConfig::default())
    }
}

impl AnomalyAssessor for ZScoreAssessor {
    fn assess(&self, current: f64, history: &[f64]) -> Result<AnomalyAssessment> {
        if history.len() < self.min_history {
            return Err(AnomalyError::InsufficientHistory {
                required: self.min_history,
                got: history.len(),
            });
        }
        Ok(assess_anomaly(current, history))
    }
}
