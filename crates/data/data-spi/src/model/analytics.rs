//! Analytics endpoint wire payloads.

use serde::{Deserialize, Serialize};

/// Precomputed statistics from the statistical-anomaly endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyStatsPayload {
    pub is_analyzable: bool,
    pub message: String,
    pub current_density: Option<f64>,
    pub average_density: Option<f64>,
    pub std_deviation: Option<f64>,
    pub z_score: Option<f64>,
}

/// One weekday row from the congestion-heatmap endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapRowPayload {
    pub day_of_week: String,
    /// 1 = Monday .. 7 = Sunday.
    pub day_of_week_index: u32,
    /// 24 entries, one per hour.
    pub hourly_average_densities: Vec<f64>,
}

/// One severity-tagged event from the alerts endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageAlertPayload {
    pub code: String,
    pub title: String,
    pub message: String,
    pub severity: String,
    pub timestamp: String,
    pub density: Option<f64>,
}
