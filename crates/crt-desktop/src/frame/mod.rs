//! Frame binding module
//!
//! Resolves a window record against the viewport into what is actually
//! drawn: effective rectangle, off-canvas placement of minimized windows,
//! chrome buttons and a draw list for the external renderer.

mod draw;
#[allow(clippy::module_inception)]
mod frame;

pub use draw::{assets, DrawCommand};
pub use frame::{ChromeButton, Frame, FrameView};

/// Vertical position used for minimized frames, far above the canvas
pub const OFFSCREEN_Y: f32 = -99999.0;
