//! Series Alignment API
//!
//! Configuration types for bucketed resampling and comparison alignment.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use series_spi::{Bucket, ChartView, DisplayBand, Observation, Result, SeriesError, TimeWindow};

// ============================================================================
// Analysis Period
// ============================================================================

/// Requested analysis period.
///
/// Each period carries a fixed bucket resolution: 5 minutes for the
/// sub-day periods, 1 hour for the week view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    /// Trailing 2 hours, 5-minute buckets
    TwoHours,
    /// Trailing 24 hours, 5-minute buckets
    Day,
    /// Trailing 7 days, 1-hour buckets
    Week,
}

impl Period {
    /// Parse a period keyword as used by the analysis endpoints.
    pub fn parse(keyword: &str) -> Result<Self> {
        match keyword {
            "2h" => Ok(Period::TwoHours),
            "24h" => Ok(Period::Day),
            "7d" => Ok(Period::Week),
            other => Err(SeriesError::InvalidParameter {
                name: "period".to_string(),
                reason: format!("unknown keyword: {}", other),
            }),
        }
    }

    /// Keyword representation.
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Period::TwoHours => "2h",
            Period::Day => "24h",
            Period::Week => "7d",
        }
    }

    /// Total span covered by the period.
    pub fn span(&self) -> Duration {
        match self {
            Period::TwoHours => Duration::hours(2),
            Period::Day => Duration::hours(24),
            Period::Week => Duration::days(7),
        }
    }

    /// Bucket resolution for the period.
    pub fn bucket_width(&self) -> Duration {
        match self {
            Period::TwoHours | Period::Day => Duration::minutes(5),
            Period::Week => Duration::hours(1),
        }
    }

    /// Build the trailing window ending at `end`.
    pub fn window_ending_at(&self, end: DateTime<Utc>) -> Result<TimeWindow> {
        TimeWindow::new(end - self.span(), end, self.bucket_width())
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Period::TwoHours => "2 Hours",
            Period::Day => "24 Hours",
            Period::Week => "7 Days",
        };
        write!(f, "{}", s)
    }
}

// ============================================================================
// Comparison Offset
// ============================================================================

/// Time shift applied to a comparison series so it overlays the primary
/// window index-for-index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOffset {
    /// Previous day (+24h shift)
    Yesterday,
    /// Same weekday of the previous week (+7x24h shift)
    LastWeek,
}

impl ComparisonOffset {
    /// Parse an offset keyword.
    pub fn parse(keyword: &str) -> Result<Self> {
        match keyword {
            "yesterday" => Ok(ComparisonOffset::Yesterday),
            "last-week" => Ok(ComparisonOffset::LastWeek),
            other => Err(SeriesError::InvalidParameter {
                name: "offset".to_string(),
                reason: format!("unknown keyword: {}", other),
            }),
        }
    }

    /// Keyword representation.
    pub fn as_keyword(&self) -> &'static str {
        match self {
            ComparisonOffset::Yesterday => "yesterday",
            ComparisonOffset::LastWeek => "last-week",
        }
    }

    /// Forward shift to apply to the comparison observations.
    pub fn duration(&self) -> Duration {
        match self {
            ComparisonOffset::Yesterday => Duration::hours(24),
            ComparisonOffset::LastWeek => Duration::days(7),
        }
    }
}

// ============================================================================
// Gap Configuration
// ============================================================================

/// Configuration for the legacy gap-insertion rendering path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GapConfig {
    /// Maximum seconds between consecutive samples before a break is
    /// inserted (default: 120).
    pub threshold_seconds: f64,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self { threshold_seconds: 120.0 }
    }
}

impl GapConfig {
    pub fn new(threshold_seconds: f64) -> Self {
        Self { threshold_seconds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_period_parse_keywords() {
        assert_eq!(Period::parse("2h").unwrap(), Period::TwoHours);
        assert_eq!(Period::parse("24h").unwrap(), Period::Day);
        assert_eq!(Period::parse("7d").unwrap(), Period::Week);
    }

    #[test]
    fn test_period_parse_unknown() {
        let result = Period::parse("1mo");
        assert!(matches!(result, Err(SeriesError::InvalidParameter { .. })));
    }

    #[test]
    fn test_period_keyword_roundtrip() {
        for period in [Period::TwoHours, Period::Day, Period::Week] {
            assert_eq!(Period::parse(period.as_keyword()).unwrap(), period);
        }
    }

    #[test]
    fn test_period_bucket_width() {
        assert_eq!(Period::TwoHours.bucket_width(), Duration::minutes(5));
        assert_eq!(Period::Day.bucket_width(), Duration::minutes(5));
        assert_eq!(Period::Week.bucket_width(), Duration::hours(1));
    }

    #[test]
    fn test_period_window_bucket_counts() {
        let end = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        assert_eq!(Period::TwoHours.window_ending_at(end).unwrap().bucket_count(), 24);
        assert_eq!(Period::Day.window_ending_at(end).unwrap().bucket_count(), 288);
        assert_eq!(Period::Week.window_ending_at(end).unwrap().bucket_count(), 168);
    }

    #[test]
    fn test_period_display() {
        assert_eq!(format!("{}", Period::TwoHours), "2 Hours");
        assert_eq!(format!("{}", Period::Week), "7 Days");
    }

    #[test]
    fn test_offset_durations() {
        assert_eq!(ComparisonOffset::Yesterday.duration(), Duration::hours(24));
        assert_eq!(ComparisonOffset::LastWeek.duration(), Duration::days(7));
    }

    #[test]
    fn test_offset_keyword_roundtrip() {
        for offset in [ComparisonOffset::Yesterday, ComparisonOffset::LastWeek] {
            assert_eq!(ComparisonOffset::parse(offset.as_keyword()).unwrap(), offset);
        }
    }

    #[test]
    fn test_offset_parse_unknown() {
        assert!(ComparisonOffset::parse("tomorrow").is_err());
    }

    #[test]
    fn test_gap_config_default() {
        assert_eq!(GapConfig::default().threshold_seconds, 120.0);
    }

    #[test]
    fn test_period_serialize() {
        let json = serde_json::to_string(&Period::Day).unwrap();
        assert_eq!(json, "\"Day\"");
    }
}
