//! Visualizer body: the externally rendered visualizer canvas

use crate::frame::{assets, DrawCommand};
use crate::math::Rect;
use crate::window::{Component, RenderContext};

/// Stretches the visualizer canvas over the window body
#[derive(Clone, Copy, Debug, Default)]
pub struct Visualizer;

impl Component for Visualizer {
    fn kind(&self) -> &str {
        "visualizer"
    }

    fn draw(&self, area: Rect, _ctx: &RenderContext) -> Vec<DrawCommand> {
        vec![DrawCommand::sprite(assets::VISUALIZER, area)]
    }
}
