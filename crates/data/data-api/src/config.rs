//! Data source configuration types.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Configuration for fetching a camera's density history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Camera identifier.
    pub camera_id: u64,
    /// Range start (inclusive).
    pub start: DateTime<Utc>,
    /// Range end (exclusive).
    pub end: DateTime<Utc>,
}

impl FetchConfig {
    /// Create a new fetch configuration.
    pub fn new(camera_id: u64, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { camera_id, start, end }
    }

    /// The trailing range of `hours` ending at `end`.
    pub fn trailing_hours(camera_id: u64, hours: i64, end: DateTime<Utc>) -> Self {
        Self::new(camera_id, end - Duration::hours(hours), end)
    }

    /// The trailing range of `days` ending at `end`.
    pub fn trailing_days(camera_id: u64, days: i64, end: DateTime<Utc>) -> Self {
        Self::new(camera_id, end - Duration::days(days), end)
    }
}

/// Builder for FetchConfig.
#[derive(Debug, Default)]
pub struct FetchConfigBuilder {
    camera_id: Option<u64>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl FetchConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the camera id.
    pub fn camera_id(mut self, camera_id: u64) -> Self {
        self.camera_id = Some(camera_id);
        self
    }

    /// Set the range start.
    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the range end.
    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<FetchConfig, &'static str> {
        Ok(FetchConfig {
            camera_id: self.camera_id.ok_or("camera_id is required")?,
            start: self.start.ok_or("start is required")?,
            end: self.end.ok_or("end is required")?,
        })
    }
}
