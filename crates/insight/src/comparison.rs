//! Period-over-period comparison summary.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use series_spi::Observation;

/// Half-width of the sampling window around each reference instant.
pub const COMPARISON_HALF_WINDOW_MINUTES: i64 = 7;

/// Average densities at the same time yesterday and last week.
///
/// Change values are simple differences in density points
/// (`current - past`), not growth rates; a 0.5 → 0.6 move reads as
/// +0.10 points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub current_density: Option<f64>,
    pub yesterday_density: Option<f64>,
    pub yesterday_change: Option<f64>,
    pub last_week_density: Option<f64>,
    pub last_week_change: Option<f64>,
}

impl ComparisonSummary {
    /// Summary with no data on either side.
    pub fn empty() -> Self {
        Self {
            current_density: None,
            yesterday_density: None,
            yesterday_change: None,
            last_week_density: None,
            last_week_change: None,
        }
    }
}

/// Mean density over the inclusive range `[start, end]`, or `None` when
/// no observation falls inside it.
pub fn average_density(
    observations: &[Observation],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for obs in observations {
        if obs.timestamp >= start && obs.timestamp <= end {
            sum += obs.density;
            count += 1;
        }
    }
    if count > 0 {
        Some(sum / count as f64)
    } else {
        None
    }
}

/// Compare the density around `now` with the same clock time yesterday
/// and a week ago, each averaged over a +-7 minute window.
pub fn comparison_summary(observations: &[Observation], now: DateTime<Utc>) -> ComparisonSummary {
    let half = Duration::minutes(COMPARISON_HALF_WINDOW_MINUTES);
    let around = |instant: DateTime<Utc>| average_density(observations, instant - half, instant + half);

    let current = around(now);
    let yesterday = around(now - Duration::days(1));
    let last_week = around(now - Duration::weeks(1));

    if current.is_none() {
        tracing::debug!("no current samples around {now}; change rates unavailable");
    }

    let change = |past: Option<f64>| match (current, past) {
        (Some(current), Some(past)) => Some(current - past),
        _ => None,
    };

    ComparisonSummary {
        current_density: current,
        yesterday_density: yesterday,
        yesterday_change: change(yesterday),
        last_week_density: last_week,
        last_week_change: change(last_week),
    }
}
