//! # crowdpulse-series
//!
//! Time-series bucketing and comparison alignment for crowd-density
//! analysis. Resamples irregular density samples onto fixed bucket grids,
//! overlays comparison periods, and builds render-agnostic chart views.

pub use series_facade::*;
