//! Series Alignment Core
//!
//! Implementations for bucketed resampling, comparison alignment, gap
//! insertion, label generation and chart view construction.

mod gaps;
mod labels;
mod resample;
mod view;

pub use gaps::insert_gaps;
pub use labels::bucket_labels;
pub use resample::{align_comparison, resample};
pub use view::{bucket_averages, build_chart_view};
