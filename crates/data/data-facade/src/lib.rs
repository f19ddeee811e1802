//! Data Source Facade
//!
//! Unified re-exports for the data source module.
//!
//! This facade provides a single entry point to all data functionality:
//! - Wire payloads, `DataError` and the `ObservationSource` trait from SPI
//! - `FetchConfig` and its builder from API
//! - Ingest coercion and the `HistoryClient` from Core

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;
