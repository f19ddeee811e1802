//! Density-history wire payloads.

use serde::{Deserialize, Serialize};

/// One sample as delivered by the density-history endpoint.
///
/// The timestamp is an ISO-8601 string, with or without a zone suffix;
/// parsing and range validation happen at ingest, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityPoint {
    pub timestamp: String,
    pub density: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_count: Option<u32>,
}
