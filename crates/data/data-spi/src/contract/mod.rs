//! Data contracts.

mod observation_source;

pub use observation_source::ObservationSource;
