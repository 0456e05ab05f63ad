//! Frame snapshots and draw lists

use crate::frame::{DrawCommand, Frame, FrameView};
use crate::window::RenderContext;
use super::DesktopEngine;

impl DesktopEngine {
    /// Bind one window to the current viewport
    pub fn frame(&self, id: &str) -> Option<Frame<'_>> {
        self.registry
            .get(id)
            .map(|info| Frame::new(info, &self.viewport, &self.style))
    }

    /// Every open window, rear to front, minimized ones included
    pub fn frames(&self) -> Vec<FrameView> {
        let focused = self.registry.focused();
        self.registry
            .iter_by_z()
            .map(|info| Frame::new(info, &self.viewport, &self.style).view(focused == Some(&info.id)))
            .collect()
    }

    /// Draw list for every open window, rear to front
    ///
    /// Minimized windows stay in the list, placed above the canvas.
    pub fn draw(&self, ctx: &RenderContext) -> Vec<DrawCommand> {
        self.registry
            .iter_by_z()
            .flat_map(|info| Frame::new(info, &self.viewport, &self.style).draw(ctx))
            .collect()
    }
}
