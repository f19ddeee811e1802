//! # crowdpulse-data
//!
//! The typed ingest boundary for crowd-density observations: wire
//! payloads, validation and coercion of raw density-history JSON, and a
//! feature-gated client for the analytics backend endpoints.

pub use data_facade::*;
