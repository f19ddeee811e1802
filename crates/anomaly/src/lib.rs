//! # crowdpulse-anomaly
//!
//! Anomaly assessment for crowd-density series: z-score scoring against a
//! rolling history, severity classification, streaming monitoring and
//! alerting.

pub use anomaly_facade::*;
