//! Window lifecycle and operations

use tracing::{debug, info};
use crate::error::{DesktopError, DesktopResult};
use crate::math::Vec2;
use crate::window::WindowInfo;
use super::DesktopEngine;

impl DesktopEngine {
    /// Open a window record on top of the stack
    pub fn open_window(&mut self, info: WindowInfo) -> DesktopResult<()> {
        self.registry.open(info)
    }

    /// Hide a window; idempotent
    pub fn minimize_window(&mut self, id: &str) -> DesktopResult<()> {
        self.registry.minimize(id)
    }

    /// Show a minimized window again
    pub fn restore_window(&mut self, id: &str) -> DesktopResult<()> {
        self.registry.restore(id)
    }

    /// Remove a window for good
    ///
    /// Windows without a close control refuse. A drag session on the
    /// window is cancelled in the same call.
    pub fn kill_window(&mut self, id: &str) -> DesktopResult<()> {
        let window = self
            .registry
            .get(id)
            .ok_or_else(|| DesktopError::WindowNotFound(id.into()))?;
        if !window.closable {
            return Err(DesktopError::NotClosable(window.id.clone()));
        }

        self.input.cancel_for(id);
        self.registry.kill(id)?;
        Ok(())
    }

    /// Flip fullscreen, returning the new state
    pub fn toggle_fullscreen(&mut self, id: &str) -> DesktopResult<bool> {
        self.registry.toggle_fullscreen(id)
    }

    /// Raise a window to the top
    pub fn focus_window(&mut self, id: &str) -> DesktopResult<()> {
        self.registry.focus(id)
    }

    /// Place a window's top-left corner
    pub fn move_window(&mut self, id: &str, x: f32, y: f32) -> DesktopResult<()> {
        self.registry.move_to(id, Vec2::new(x, y))
    }

    /// Launch from a desktop icon
    ///
    /// An open window is restored and raised; otherwise the catalog
    /// template for the id is instantiated and opened on top.
    pub fn activate_icon(&mut self, id: &str) -> DesktopResult<()> {
        if self.registry.contains(id) {
            debug!(event = "desktop.engine.icon_reshown", window_id = id);
            self.registry.restore(id)?;
            return self.registry.focus(id);
        }

        let template = self
            .catalog
            .get(id)
            .ok_or_else(|| DesktopError::UnknownTemplate(id.into()))?;
        let window = template.instantiate(&self.factory)?;
        self.registry.open(window)?;
        info!(event = "desktop.engine.icon_launched", window_id = id);
        Ok(())
    }
}
