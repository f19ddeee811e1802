//! Series Alignment Service Provider Interface
//!
//! Defines the models, errors and contracts for time-series bucketing
//! and comparison alignment.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::RenderAdapter;
pub use error::{Result, SeriesError};
pub use model::{Bucket, ChartView, DisplayBand, Observation, TimeWindow};
