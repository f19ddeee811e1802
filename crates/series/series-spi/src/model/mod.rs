//! Series model types.

mod bucket;
mod chart_view;
mod observation;
mod window;

pub use bucket::Bucket;
pub use chart_view::{ChartView, DisplayBand};
pub use observation::Observation;
pub use window::TimeWindow;
