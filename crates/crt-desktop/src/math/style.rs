//! Window chrome layout constants

use serde::{Deserialize, Serialize};
use super::Size;

/// Layout constants for window chrome and the reserved footer band
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeStyle {
    /// Height of the title bar; chrome buttons are squares of this size
    pub header_height: f32,
    /// Height of the footer band kept free by fullscreen windows
    pub footer_height: f32,
    /// Smallest size a resize drag may produce
    pub min_window_size: Size,
    /// Side of the square resize grip in the bottom-right corner
    pub resize_handle_size: f32,
    /// Font size of the title text, relative to the header height
    pub title_font_scale: f32,
    /// Left padding of the title text
    pub title_padding: f32,
}

impl ChromeStyle {
    /// Default chrome layout
    pub const DEFAULT: ChromeStyle = ChromeStyle {
        header_height: 24.0,
        footer_height: 40.0,
        min_window_size: Size::new(80.0, 48.0),
        resize_handle_size: 10.0,
        title_font_scale: 0.5,
        title_padding: 5.0,
    };
}

impl Default for ChromeStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}
