//! Render adapter trait definition.

use crate::error::Result;
use crate::model::ChartView;

/// Rendering backend lifecycle.
///
/// Isolates the alignment core from any specific chart library: a backend
/// owns its widget handles and receives immutable [`ChartView`] values.
/// The core never retains or mutates a handle.
pub trait RenderAdapter: Send {
    /// Backend-specific widget handle.
    type Handle;

    /// Create a new chart surface for the given view.
    fn create(&mut self, view: &ChartView) -> Result<Self::Handle>;

    /// Replace the data shown on an existing surface.
    fn update(&mut self, handle: &mut Self::Handle, view: &ChartView) -> Result<()>;

    /// Tear down a surface and release its resources.
    fn destroy(&mut self, handle: Self::Handle);
}
