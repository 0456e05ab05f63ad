//! Draw list handed to the sprite renderer

use serde::Serialize;
use crate::math::{Rect, Vec2};

/// Asset keys understood by the renderer
pub mod assets {
    /// Title bar background
    pub const BAR: &str = "bar";
    /// Body background
    pub const BACKGROUND: &str = "bg";
    /// Close button
    pub const CLOSE: &str = "close";
    /// Minimize button
    pub const MINIMIZE: &str = "minimize";
    /// Fullscreen toggle button
    pub const FULLSCREEN: &str = "fullscreen";
    /// Visualizer output canvas
    pub const VISUALIZER: &str = "visualizer";
}

/// One primitive for the renderer, in canvas coordinates
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Stretch an image asset over a rectangle
    Sprite {
        asset: String,
        rect: Rect,
    },
    /// Draw a line of text
    Text {
        text: String,
        /// Anchor point in canvas coordinates
        position: Vec2,
        /// Normalized anchor inside the text box (0,0 = top-left)
        anchor: Vec2,
        font_size: f32,
        /// 0xRRGGBB
        color: u32,
    },
    /// Fill a rectangle with a solid color
    Fill {
        rect: Rect,
        /// 0xRRGGBB
        color: u32,
    },
}

impl DrawCommand {
    /// Sprite command for an asset key
    pub fn sprite(asset: &str, rect: Rect) -> Self {
        DrawCommand::Sprite {
            asset: asset.to_string(),
            rect,
        }
    }

    /// Sprite asset key, if this is a sprite
    pub fn asset(&self) -> Option<&str> {
        match self {
            DrawCommand::Sprite { asset, .. } => Some(asset),
            _ => None,
        }
    }
}
