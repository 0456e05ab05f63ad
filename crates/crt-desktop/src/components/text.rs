//! Static text body

use crate::frame::DrawCommand;
use crate::math::{Rect, Vec2};
use crate::window::{Component, RenderContext};

const PADDING: f32 = 8.0;
const LINE_HEIGHT: f32 = 18.0;
const FONT_SIZE: f32 = 14.0;

/// Plain text document, one draw command per line that fits
#[derive(Clone, Debug, Default)]
pub struct TextDocument {
    lines: Vec<String>,
}

impl TextDocument {
    /// Split text into lines
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }
}

impl Component for TextDocument {
    fn kind(&self) -> &str {
        "text"
    }

    fn draw(&self, area: Rect, _ctx: &RenderContext) -> Vec<DrawCommand> {
        let fitting = ((area.height - PADDING * 2.0) / LINE_HEIGHT).floor().max(0.0) as usize;
        self.lines
            .iter()
            .take(fitting)
            .enumerate()
            .map(|(i, line)| DrawCommand::Text {
                text: line.clone(),
                position: Vec2::new(area.x + PADDING, area.y + PADDING + i as f32 * LINE_HEIGHT),
                anchor: Vec2::ZERO,
                font_size: FONT_SIZE,
                color: 0x000000,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_fitting_lines_drawn() {
        let doc = TextDocument::new("one\ntwo\nthree\nfour");
        // room for two lines
        let area = Rect::new(0.0, 0.0, 200.0, PADDING * 2.0 + LINE_HEIGHT * 2.5);

        let commands = doc.draw(area, &RenderContext::default());
        assert_eq!(commands.len(), 2);
        assert!(matches!(&commands[1], DrawCommand::Text { text, .. } if text == "two"));
    }

    #[test]
    fn test_tiny_area_draws_nothing() {
        let doc = TextDocument::new("one");
        let commands = doc.draw(Rect::new(0.0, 0.0, 200.0, 4.0), &RenderContext::default());
        assert!(commands.is_empty());
    }
}
