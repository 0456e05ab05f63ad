//! Drag session state

use crate::math::{Rect, Size, Vec2};
use crate::window::WindowId;

/// An in-progress pointer drag
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Moving a window
    MoveWindow {
        /// Window being moved
        window_id: WindowId,
        /// Offset from window origin to cursor, fixed for the whole drag
        offset: Vec2,
    },
    /// Resizing a window from its bottom-right grip
    ResizeWindow {
        /// Window being resized
        window_id: WindowId,
        /// Window rectangle at start
        start_rect: Rect,
        /// Pointer position at start
        start_pointer: Vec2,
    },
}

impl DragState {
    /// Check if this is a window move operation
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::MoveWindow { .. })
    }

    /// Check if this is a window resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::ResizeWindow { .. })
    }

    /// Window this drag targets
    pub fn window_id(&self) -> &WindowId {
        match self {
            DragState::MoveWindow { window_id, .. } => window_id,
            DragState::ResizeWindow { window_id, .. } => window_id,
        }
    }

    /// Rectangle the drag asks for, given the current stored rectangle and
    /// the pointer position
    ///
    /// Moves keep the size of `current`; resizes keep its position and
    /// never go below `min_size`.
    pub fn target_rect(&self, current: Rect, pointer: Vec2, min_size: Size) -> Rect {
        match self {
            DragState::MoveWindow { offset, .. } => current.with_position(pointer - *offset),
            DragState::ResizeWindow { start_rect, start_pointer, .. } => {
                let delta = pointer - *start_pointer;
                let size = Size::new(start_rect.width + delta.x, start_rect.height + delta.y);
                Rect::from_pos_size(current.position(), size.at_least(min_size))
            }
        }
    }
}
