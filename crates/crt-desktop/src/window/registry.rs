//! Window registry: the single source of truth for window state and z-order

use std::collections::HashMap;
use tracing::{debug, warn};
use crate::error::{DesktopError, DesktopResult};
use crate::math::Vec2;
use super::{WindowId, WindowInfo};

/// Authoritative store of open windows
///
/// Every mutation is synchronous and visible to the next read. Mutations
/// addressing an id that is not open fail with
/// [`DesktopError::WindowNotFound`].
#[derive(Default)]
pub struct WindowRegistry {
    /// All windows by id
    windows: HashMap<WindowId, WindowInfo>,
    /// Stacking order, rear to front
    stack: Vec<WindowId>,
}

impl WindowRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new window on top of the stack
    pub fn open(&mut self, info: WindowInfo) -> DesktopResult<()> {
        if self.windows.contains_key(&info.id) {
            warn!(event = "desktop.registry.open_duplicate", window_id = %info.id);
            return Err(DesktopError::DuplicateWindow(info.id));
        }
        validate(&info)?;

        debug!(
            event = "desktop.registry.opened",
            window_id = %info.id,
            x = info.rect.x,
            y = info.rect.y,
            width = info.rect.width,
            height = info.rect.height
        );
        self.stack.push(info.id.clone());
        self.windows.insert(info.id.clone(), info);
        Ok(())
    }

    /// Get a window by id
    #[inline]
    pub fn get(&self, id: &str) -> Option<&WindowInfo> {
        self.windows.get(id)
    }

    /// Check if a window is open
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.windows.contains_key(id)
    }

    /// Number of open windows
    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no window is open
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Window ids rear to front
    pub fn ids(&self) -> &[WindowId] {
        &self.stack
    }

    /// Windows rear to front
    pub fn iter_by_z(&self) -> impl DoubleEndedIterator<Item = &WindowInfo> + '_ {
        self.stack.iter().filter_map(|id| self.windows.get(id))
    }

    /// Topmost visible window
    pub fn focused(&self) -> Option<&WindowId> {
        self.iter_by_z().rev().find(|w| w.visible).map(|w| &w.id)
    }

    /// Replace the stored record for `id` wholesale
    ///
    /// There is no merge: fields not carried by `info` are gone. Build the
    /// replacement from a fresh [`get`](Self::get).
    pub fn update(&mut self, id: &str, info: WindowInfo) -> DesktopResult<()> {
        if info.id.as_str() != id {
            return Err(DesktopError::IdMismatch {
                expected: WindowId::from(id),
                found: info.id,
            });
        }
        validate(&info)?;

        let slot = self.slot_mut(id)?;
        *slot = info;
        debug!(
            event = "desktop.registry.updated",
            window_id = id,
            x = slot.rect.x,
            y = slot.rect.y,
            width = slot.rect.width,
            height = slot.rect.height
        );
        Ok(())
    }

    /// Move a window's top-left corner, keeping every other field
    pub fn move_to(&mut self, id: &str, position: Vec2) -> DesktopResult<()> {
        let current = self.get(id).ok_or_else(|| DesktopError::WindowNotFound(id.into()))?;
        let moved = WindowInfo {
            rect: current.rect.with_position(position),
            ..current.clone()
        };
        self.update(id, moved)
    }

    /// Hide a window without closing it; idempotent
    pub fn minimize(&mut self, id: &str) -> DesktopResult<()> {
        self.slot_mut(id)?.visible = false;
        debug!(event = "desktop.registry.minimized", window_id = id);
        Ok(())
    }

    /// Show a minimized window again
    pub fn restore(&mut self, id: &str) -> DesktopResult<()> {
        self.slot_mut(id)?.visible = true;
        debug!(event = "desktop.registry.restored", window_id = id);
        Ok(())
    }

    /// Flip the fullscreen flag; the stored rectangle is untouched
    pub fn toggle_fullscreen(&mut self, id: &str) -> DesktopResult<bool> {
        let window = self.slot_mut(id)?;
        window.fullscreen = !window.fullscreen;
        let fullscreen = window.fullscreen;
        debug!(event = "desktop.registry.fullscreen_toggled", window_id = id, fullscreen);
        Ok(fullscreen)
    }

    /// Raise a window to the top of the stack
    pub fn focus(&mut self, id: &str) -> DesktopResult<()> {
        let pos = self
            .stack
            .iter()
            .position(|wid| wid.as_str() == id)
            .ok_or_else(|| DesktopError::WindowNotFound(id.into()))?;

        if pos + 1 != self.stack.len() {
            let wid = self.stack.remove(pos);
            self.stack.push(wid);
            debug!(event = "desktop.registry.focused", window_id = id);
        }
        Ok(())
    }

    /// Remove a window entirely, returning its last record
    pub fn kill(&mut self, id: &str) -> DesktopResult<WindowInfo> {
        let info = self
            .windows
            .remove(id)
            .ok_or_else(|| DesktopError::WindowNotFound(id.into()))?;
        self.stack.retain(|wid| wid.as_str() != id);
        debug!(event = "desktop.registry.killed", window_id = id);
        Ok(info)
    }

    fn slot_mut(&mut self, id: &str) -> DesktopResult<&mut WindowInfo> {
        self.windows.get_mut(id).ok_or_else(|| {
            warn!(event = "desktop.registry.unknown_window", window_id = id);
            DesktopError::WindowNotFound(id.into())
        })
    }
}

/// Reject records whose stored rectangle could reach rendering degenerate
fn validate(info: &WindowInfo) -> DesktopResult<()> {
    if info.rect.is_valid() {
        return Ok(());
    }
    warn!(
        event = "desktop.registry.degenerate_geometry",
        window_id = %info.id,
        width = info.rect.width,
        height = info.rect.height
    );
    Err(DesktopError::DegenerateGeometry {
        id: info.id.clone(),
        width: info.rect.width,
        height: info.rect.height,
    })
}
