//! Canvas viewport

use tracing::warn;
use crate::math::{ChromeStyle, Rect, Size, Vec2};

/// The visible canvas
///
/// Plain state holder for the canvas size; the host reports resizes.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Canvas size in pixels
    pub size: Size,
}

const DEFAULT_SIZE: Size = Size::new(1920.0, 1080.0);

impl Default for Viewport {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

impl Viewport {
    /// Create a new viewport with the given canvas size
    ///
    /// An unusable size falls back to the default canvas.
    pub fn new(width: f32, height: f32) -> Self {
        let mut viewport = Self::default();
        viewport.resize(width, height);
        viewport
    }

    /// Update the canvas size
    ///
    /// Sizes that are not finite and strictly positive are ignored and the
    /// previous size is kept.
    pub fn resize(&mut self, width: f32, height: f32) {
        let size = Size::new(width, height);
        if !width.is_finite() || !height.is_finite() || size.is_empty() {
            warn!(event = "desktop.viewport.resize_rejected", width, height);
            return;
        }
        self.size = size;
    }

    /// Geometry substituted for a fullscreen window
    ///
    /// Covers the canvas minus the footer band. Never smaller than the
    /// minimum window size, so a tiny canvas cannot produce a degenerate
    /// frame.
    pub fn fullscreen_rect(&self, style: &ChromeStyle) -> Rect {
        let available = Size::new(self.size.width, self.size.height - style.footer_height);
        Rect::from_pos_size(Vec2::ZERO, available.at_least(style.min_window_size))
    }
}
