//! Series Alignment Facade
//!
//! Unified re-exports for the series alignment module.
//!
//! This facade provides a single entry point to all series functionality:
//! - Models (`Observation`, `TimeWindow`, `Bucket`, `ChartView`) and the
//!   `RenderAdapter` contract from SPI
//! - Configuration types (`Period`, `ComparisonOffset`, `GapConfig`) from API
//! - `resample`, `align_comparison`, `insert_gaps`, `bucket_labels` and
//!   `build_chart_view` from Core

// Re-export everything from SPI
pub use series_spi::*;

// Re-export everything from API
pub use series_api::*;

// Re-export everything from Core
pub use series_core::*;
