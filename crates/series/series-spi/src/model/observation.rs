//! Density observation types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped crowd-density sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Sampling instant (UTC).
    pub timestamp: DateTime<Utc>,
    /// Normalized crowd density in `[0, 1]`.
    pub density: f64,
}

impl Observation {
    /// Create a new observation.
    pub fn new(timestamp: DateTime<Utc>, density: f64) -> Self {
        Self { timestamp, density }
    }

    /// Copy of this observation with its timestamp shifted by `offset`.
    pub fn shifted(&self, offset: chrono::Duration) -> Self {
        Self {
            timestamp: self.timestamp + offset,
            density: self.density,
        }
    }
}
