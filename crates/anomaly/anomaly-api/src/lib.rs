//! Anomaly Assessment API
//!
//! Configuration types for anomaly assessment and monitoring.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{Alert, AnomalyAssessment, AnomalyError, AnomalySeverity, Result};

// ============================================================================
// Assessor Configuration
// ============================================================================

/// Z-score assessor configuration.
///
/// The severity thresholds themselves are fixed design constants; only
/// the history requirement is configurable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AssessorConfig {
    /// Minimum history samples before an assessment is meaningful
    /// (default: 20).
    pub min_history: usize,
}

impl Default for AssessorConfig {
    fn default() -> Self {
        Self { min_history: 20 }
    }
}

impl AssessorConfig {
    pub fn new(min_history: usize) -> Self {
        Self { min_history }
    }
}

// ============================================================================
// Monitor Configuration
// ============================================================================

/// Monitor configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Rolling buffer size for streaming assessment (default: 60, the
    /// analysis backend's recent-log fetch depth).
    pub buffer_size: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self { buffer_size: 60 }
    }
}

impl MonitorConfig {
    pub fn new(buffer_size: usize) -> Self {
        Self { buffer_size }
    }
}
