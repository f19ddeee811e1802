//! Series contracts.

mod render_adapter;

pub use render_adapter::RenderAdapter;
