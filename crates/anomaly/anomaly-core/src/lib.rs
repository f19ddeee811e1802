//! Anomaly Assessment Core
//!
//! Z-score scoring, severity classification, streaming monitoring and
//! alert construction.

mod alerting;
mod monitoring;
mod scoring;

pub use alerting::{create_alert, AlertBuilder};
pub use monitoring::Monitor;
pub use scoring::{
    assess_anomaly, classify_precomputed, severity_for, ZScoreAssessor, DANGER_Z, WARNING_Z,
};
