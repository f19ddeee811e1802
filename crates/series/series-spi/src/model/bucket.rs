//! Aggregated bucket types.

use serde::{Deserialize, Serialize};

use super::Observation;

/// Summary statistics for one fixed-width time bucket.
///
/// A bucket only exists where at least one observation contributed; an
/// empty bucket is represented as `None` in the resampled sequence and
/// must render as a break, never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Mean density of the contributing observations.
    pub average: f64,
    /// Lowest contributing density.
    pub min: f64,
    /// Highest contributing density.
    pub max: f64,
    /// Number of contributing observations.
    pub sample_count: usize,
    /// The observation that achieved the bucket maximum. Ties resolve to
    /// the earliest timestamp, so tooltip content is deterministic.
    pub peak: Option<Observation>,
}
