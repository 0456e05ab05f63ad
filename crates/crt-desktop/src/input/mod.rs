//! Input module
//!
//! Provides the pointer state machine for window move and resize drags.

mod controller;
mod drag;
mod result;

pub use controller::PointerController;
pub use drag::DragState;
pub use result::InputResult;
