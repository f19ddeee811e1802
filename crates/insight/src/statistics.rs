//! Per-camera ranking statistics.

use serde::{Deserialize, Serialize};

/// Peak and volatility statistics for one camera over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraStatistics {
    pub camera_id: u64,
    pub camera_name: String,
    /// Highest density seen in the period.
    pub peak_density: f64,
    /// Population standard deviation of the period's densities.
    pub density_std_dev: f64,
}

/// Compute a camera's statistics, or `None` when it has no samples.
pub fn camera_statistics(
    camera_id: u64,
    camera_name: &str,
    densities: &[f64],
) -> Option<CameraStatistics> {
    if densities.is_empty() {
        return None;
    }

    let peak_density = densities.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let n = densities.len() as f64;
    let mean = densities.iter().sum::<f64>() / n;
    let density_std_dev =
        (densities.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n).sqrt();

    Some(CameraStatistics {
        camera_id,
        camera_name: camera_name.to_string(),
        peak_density,
        density_std_dev,
    })
}

/// Busiest cameras first, by peak density.
pub fn top_hotspots(stats: &[CameraStatistics], limit: usize) -> Vec<CameraStatistics> {
    ranked(stats, limit, |s| s.peak_density)
}

/// Most volatile cameras first, by standard deviation.
pub fn top_volatility(stats: &[CameraStatistics], limit: usize) -> Vec<CameraStatistics> {
    ranked(stats, limit, |s| s.density_std_dev)
}

fn ranked(
    stats: &[CameraStatistics],
    limit: usize,
    key: impl Fn(&CameraStatistics) -> f64,
) -> Vec<CameraStatistics> {
    let mut sorted: Vec<CameraStatistics> = stats.to_vec();
    sorted.sort_by(|a, b| key(b).total_cmp(&key(a)));
    sorted.truncate(limit);
    sorted
}
