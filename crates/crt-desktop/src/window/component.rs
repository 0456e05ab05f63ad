//! The render capability hosted in a window body

use crate::frame::DrawCommand;
use crate::math::Rect;

/// Per-frame inputs shared by every component
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderContext {
    /// Host wall-clock time in milliseconds since local midnight
    pub time_ms: f64,
}

impl RenderContext {
    /// Create a context for the given local time
    pub fn at(time_ms: f64) -> Self {
        Self { time_ms }
    }
}

/// Anything that can draw itself into a rectangle
///
/// The registry only stores a shared handle to a component; creating and
/// dropping the component itself is up to whoever built the catalog.
pub trait Component {
    /// Stable key naming this component kind (`"clock"`, `"visualizer"`)
    fn kind(&self) -> &str;

    /// Produce draw commands for the body area
    ///
    /// `area` always has a strictly positive width and height.
    fn draw(&self, area: Rect, ctx: &RenderContext) -> Vec<DrawCommand>;
}
