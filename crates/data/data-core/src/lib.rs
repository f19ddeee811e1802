//! Data Source Core
//!
//! Ingest validation and the analytics-backend client.

mod ingest;

pub mod client;

pub use ingest::{coerce_observations, parse_history, parse_timestamp};

pub use client::HistoryClient;

#[cfg(feature = "fetch")]
pub use client::fetch_history;
