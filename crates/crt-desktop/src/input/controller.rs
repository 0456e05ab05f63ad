//! Pointer controller: the drag state machine
//!
//! One controller serves every frame. Presses arrive per window from the
//! frame that was hit; moves and releases arrive from the single global
//! listener pair, since the pointer may leave the frame mid-drag.

use tracing::{debug, trace};
use crate::frame::Frame;
use crate::math::{Size, Vec2};
use crate::window::{WindowId, WindowInfo, WindowRegistry};
use super::{DragState, InputResult};

/// Drag state machine: `Idle` when `drag` is `None`, otherwise `Dragging`
///
/// The registry is passed into every handler; the controller never keeps
/// a copy of a window record between events.
pub struct PointerController {
    /// Current drag session
    drag: Option<DragState>,
    /// Smallest size a resize may produce
    min_size: Size,
}

impl PointerController {
    /// Create an idle controller
    pub fn new(min_size: Size) -> Self {
        Self { drag: None, min_size }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Window targeted by the active session, if any
    pub fn active_window(&self) -> Option<&WindowId> {
        self.drag.as_ref().map(DragState::window_id)
    }

    /// Press on a window's draggable chrome: start a move session
    ///
    /// Ignored while another session is active. Windows that are gone,
    /// minimized or fullscreen do not start a session.
    pub fn on_press(&mut self, registry: &WindowRegistry, id: &str, pointer: Vec2) -> InputResult {
        let Some(window) = self.pressable(registry, id) else {
            return InputResult::Unhandled;
        };

        let offset = pointer - window.rect.position();
        debug!(
            event = "desktop.input.drag_started",
            window_id = id,
            offset_x = offset.x,
            offset_y = offset.y
        );
        self.drag = Some(DragState::MoveWindow {
            window_id: window.id.clone(),
            offset,
        });
        InputResult::Handled
    }

    /// Press on a window's resize grip: start a resize session
    pub fn on_resize_press(&mut self, registry: &WindowRegistry, id: &str, pointer: Vec2) -> InputResult {
        let Some(window) = self.pressable(registry, id) else {
            return InputResult::Unhandled;
        };

        debug!(event = "desktop.input.resize_started", window_id = id);
        self.drag = Some(DragState::ResizeWindow {
            window_id: window.id.clone(),
            start_rect: window.rect,
            start_pointer: pointer,
        });
        InputResult::Handled
    }

    /// Global pointer move
    ///
    /// Re-reads the session's window from the registry on every call. A
    /// window that has been killed ends the session without any write; a
    /// window that went fullscreen or was minimized absorbs the move.
    pub fn on_move(&mut self, registry: &mut WindowRegistry, pointer: Vec2) -> InputResult {
        let Some(drag) = self.drag.as_ref() else {
            return InputResult::Unhandled;
        };

        let Some(current) = registry.get(drag.window_id().as_str()) else {
            debug!(event = "desktop.input.drag_target_gone", window_id = %drag.window_id());
            self.drag = None;
            return InputResult::Unhandled;
        };

        if current.fullscreen || !current.visible {
            trace!(event = "desktop.input.move_absorbed", window_id = %current.id);
            return InputResult::Handled;
        }

        if !pointer.is_finite() {
            return InputResult::Handled;
        }
        let rect = drag.target_rect(current.rect, pointer, self.min_size);
        if rect == current.rect {
            return InputResult::Handled;
        }

        let id = current.id.clone();
        let next = WindowInfo { rect, ..current.clone() };
        match registry.update(id.as_str(), next) {
            Ok(()) => InputResult::Handled,
            Err(e) => {
                debug!(event = "desktop.input.move_rejected", window_id = %id, error = %e);
                InputResult::Handled
            }
        }
    }

    /// Global pointer release: end any session; idempotent
    pub fn on_release(&mut self) -> InputResult {
        match self.drag.take() {
            Some(drag) => {
                debug!(event = "desktop.input.drag_ended", window_id = %drag.window_id());
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Force `Idle` if the active session targets `id`
    pub fn cancel_for(&mut self, id: &str) {
        if self.drag.as_ref().is_some_and(|d| d.window_id().as_str() == id) {
            debug!(event = "desktop.input.drag_cancelled", window_id = id);
            self.drag = None;
        }
    }

    /// Cursor shape for the pointer over the topmost frame under it, if
    /// any; never mutates anything
    pub fn hover_cursor(&self, frame: Option<&Frame<'_>>, pointer: Vec2) -> &'static str {
        match &self.drag {
            Some(drag) if drag.is_move() => "move",
            Some(drag) if drag.is_resize() => "nwse-resize",
            _ => frame
                .and_then(|f| f.hit_test(pointer).map(|region| region.cursor(f.info().content_interactive)))
                .unwrap_or("default"),
        }
    }

    /// The window a press may start a session on
    fn pressable<'r>(&self, registry: &'r WindowRegistry, id: &str) -> Option<&'r WindowInfo> {
        if let Some(active) = &self.drag {
            debug!(
                event = "desktop.input.press_ignored",
                window_id = id,
                active = %active.window_id()
            );
            return None;
        }
        registry
            .get(id)
            .filter(|window| window.visible && !window.fullscreen)
    }
}
