//! Analytics backend client
//!
//! Fetches density history and related analytics from the collaborator
//! REST endpoints. Network access is behind the `fetch` feature; the URL
//! construction and payload shapes are always available.
//!
//! # Example
//!
//! ```ignore
//! use chrono::{Duration, Utc};
//! use data_core::HistoryClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = HistoryClient::new("http://localhost:8080");
//!     let end = Utc::now();
//!     let observations = client
//!         .fetch_history(7, end - Duration::hours(24), end)
//!         .await
//!         .unwrap();
//!     println!("Got {} observations", observations.len());
//! }
//! ```

use chrono::{DateTime, Utc};

#[cfg(feature = "fetch")]
use crate::ingest::coerce_observations;
#[cfg(feature = "fetch")]
use data_spi::{
    AnomalyStatsPayload, DataError, DensityPoint, HeatmapRowPayload, ObservationSource, Result,
    StageAlertPayload,
};
#[cfg(feature = "fetch")]
use series_spi::Observation;

/// Timestamp format used in range query parameters (zone-less, matching
/// the backend's local date-time binding).
const QUERY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Client for the crowd-density analytics endpoints.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    base_url: String,
}

impl HistoryClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Build the density-history URL for a camera and range.
    fn history_url(&self, camera_id: u64, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        format!(
            "{}/api/v1/cameras/{}/density-history?start={}&end={}",
            self.base_url,
            camera_id,
            start.format(QUERY_TIME_FORMAT),
            end.format(QUERY_TIME_FORMAT)
        )
    }

    /// Build the statistical-anomaly URL for a camera.
    fn anomaly_url(&self, camera_id: u64) -> String {
        format!("{}/api/v1/cameras/{}/statistical-anomaly", self.base_url, camera_id)
    }

    /// Build the congestion-heatmap URL for a camera.
    fn heatmap_url(&self, camera_id: u64) -> String {
        format!("{}/api/v1/cameras/{}/congestion-heatmap", self.base_url, camera_id)
    }

    /// Build the recent-alerts URL for a camera.
    fn alerts_url(&self, camera_id: u64, limit: usize) -> String {
        format!("{}/api/v1/cameras/{}/alerts?limit={}", self.base_url, camera_id, limit)
    }

    #[cfg(feature = "fetch")]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = reqwest::get(url)
            .await
            .map_err(|e| DataError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::ApiError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("request rejected").to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| DataError::ParseError(e.to_string()))
    }

    /// Fetch and coerce a camera's density history (async).
    #[cfg(feature = "fetch")]
    pub async fn fetch_history(
        &self,
        camera_id: u64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Observation>> {
        let url = self.history_url(camera_id, start, end);
        let points: Vec<DensityPoint> = self.get_json(&url).await?;
        Ok(coerce_observations(&points))
    }

    /// Fetch and coerce a camera's density history (blocking).
    #[cfg(feature = "fetch")]
    pub fn fetch_history_blocking(
        &self,
        camera_id: u64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Observation>> {
        let url = self.history_url(camera_id, start, end);
        let response = reqwest::blocking::get(&url)
            .map_err(|e| DataError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::ApiError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("request rejected").to_string(),
            });
        }

        let points: Vec<DensityPoint> = response
            .json()
            .map_err(|e| DataError::ParseError(e.to_string()))?;
        Ok(coerce_observations(&points))
    }

    /// Fetch the backend-precomputed anomaly statistics for a camera.
    #[cfg(feature = "fetch")]
    pub async fn fetch_anomaly_stats(&self, camera_id: u64) -> Result<AnomalyStatsPayload> {
        self.get_json(&self.anomaly_url(camera_id)).await
    }

    /// Fetch the weekly congestion heatmap for a camera.
    #[cfg(feature = "fetch")]
    pub async fn fetch_heatmap(&self, camera_id: u64) -> Result<Vec<HeatmapRowPayload>> {
        self.get_json(&self.heatmap_url(camera_id)).await
    }

    /// Fetch recent severity-tagged alerts for a camera.
    #[cfg(feature = "fetch")]
    pub async fn fetch_alerts(
        &self,
        camera_id: u64,
        limit: usize,
    ) -> Result<Vec<StageAlertPayload>> {
        self.get_json(&self.alerts_url(camera_id, limit)).await
    }
}

#[cfg(feature = "fetch")]
impl ObservationSource for HistoryClient {
    fn name(&self) -> &str {
        "analytics-backend"
    }

    fn fetch_history_sync(
        &self,
        camera_id: u64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Observation>> {
        self.fetch_history_blocking(camera_id, start, end)
    }
}

/// Convenience function to fetch a camera's history (async).
#[cfg(feature = "fetch")]
pub async fn fetch_history(
    base_url: &str,
    camera_id: u64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<Observation>> {
    HistoryClient::new(base_url)
        .fetch_history(camera_id, start, end)
        .await
}
