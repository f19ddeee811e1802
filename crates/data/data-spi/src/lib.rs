//! Data Source Service Provider Interface
//!
//! Defines wire payloads, errors and the retrieval contract for the
//! crowd-density analytics endpoints.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ObservationSource;
pub use error::{DataError, Result};
pub use model::{AnomalyStatsPayload, DensityPoint, HeatmapRowPayload, StageAlertPayload};
