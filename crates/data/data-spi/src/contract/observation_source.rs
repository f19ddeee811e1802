//! Observation source trait definition.

use chrono::{DateTime, Utc};
use series_spi::Observation;

use crate::error::Result;

/// Trait for sources that can fetch density observations for a camera.
///
/// Implementations provide access to the analytics backend or to test
/// fixtures; the alignment core only ever sees the typed observations.
pub trait ObservationSource: Send + Sync {
    /// Data source name.
    fn name(&self) -> &str;

    /// Fetch the density history for a camera and time range,
    /// synchronously.
    fn fetch_history_sync(
        &self,
        camera_id: u64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Observation>>;
}
