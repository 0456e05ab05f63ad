//! Clock body

use crate::frame::DrawCommand;
use crate::math::{Rect, Vec2};
use crate::window::{Component, RenderContext};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Digital clock showing the host's local time
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    /// Text color, 0xRRGGBB
    pub color: u32,
}

impl Default for Clock {
    fn default() -> Self {
        Self { color: 0x000000 }
    }
}

impl Clock {
    /// Format milliseconds since local midnight as `HH:MM:SS`
    pub fn format(time_ms: f64) -> String {
        let ms = if time_ms.is_finite() { time_ms.rem_euclid(MS_PER_DAY) } else { 0.0 };
        let total = (ms / 1000.0) as u32;
        format!("{:02}:{:02}:{:02}", total / 3600, (total / 60) % 60, total % 60)
    }
}

impl Component for Clock {
    fn kind(&self) -> &str {
        "clock"
    }

    fn draw(&self, area: Rect, ctx: &RenderContext) -> Vec<DrawCommand> {
        let center = Vec2::new(area.x + area.width / 2.0, area.y + area.height / 2.0);
        vec![DrawCommand::Text {
            text: Self::format(ctx.time_ms),
            position: center,
            anchor: Vec2::new(0.5, 0.5),
            font_size: (area.height * 0.3).min(area.width * 0.15),
            color: self.color,
        }]
    }
}
