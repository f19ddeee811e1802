//! # crowdpulse-ts
//!
//! Crowd-density time-series analytics: bucketed resampling, comparison
//! alignment, gap detection, z-score anomaly assessment and supplemental
//! congestion insights.
//!
//! Each domain ships as its own crate group; this root crate re-exports
//! them for one-stop use:
//!
//! ```rust
//! use crowdpulse_ts::series::{resample, Period};
//! use crowdpulse_ts::anomaly::assess_anomaly;
//! ```

pub use anomaly;
pub use data;
pub use insight;
pub use series;
