//! Chart view-model types.

use serde::{Deserialize, Serialize};

/// One-sigma display band around a rolling mean.
///
/// This is `[mean - stddev, mean + stddev]`, a visualization aid, not a
/// confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayBand {
    pub lower: f64,
    pub upper: f64,
}

/// Immutable view-model for one rendered analysis chart.
///
/// Built once per update by the core and handed to a [`RenderAdapter`]
/// implementation; event handlers produce a new view rather than mutating
/// a shared one.
///
/// [`RenderAdapter`]: crate::contract::RenderAdapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    /// One label per bucket index.
    pub labels: Vec<String>,
    /// Primary series bucket averages; `None` is a gap.
    pub primary: Vec<Option<f64>>,
    /// Optional comparison series aligned index-for-index with `primary`.
    pub comparison: Option<Vec<Option<f64>>>,
    /// Optional normal band for display.
    pub band: Option<DisplayBand>,
}
