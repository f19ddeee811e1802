//! Data Source API
//!
//! Configuration types and builders for fetching density history.

mod config;

pub use config::{FetchConfig, FetchConfigBuilder};

// Re-export SPI types
pub use data_spi::{
    AnomalyStatsPayload, DataError, DensityPoint, HeatmapRowPayload, ObservationSource, Result,
    StageAlertPayload,
};
