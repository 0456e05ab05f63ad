//! Frame: a window record resolved for rendering and hit testing

use serde::Serialize;
use tracing::trace;
use crate::math::{ChromeStyle, Rect, Vec2};
use crate::viewport::Viewport;
use crate::window::{RenderContext, WindowId, WindowInfo, WindowRegion};
use super::{assets, DrawCommand, OFFSCREEN_Y};

/// Title text color
const TITLE_COLOR: u32 = 0x000000;

/// A chrome button and where it sits on the canvas
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChromeButton {
    pub region: WindowRegion,
    pub rect: Rect,
}

impl ChromeButton {
    /// Sprite asset for this button
    pub fn asset(&self) -> &'static str {
        match self.region {
            WindowRegion::CloseButton => assets::CLOSE,
            WindowRegion::FullscreenButton => assets::FULLSCREEN,
            _ => assets::MINIMIZE,
        }
    }
}

/// Serializable snapshot of a frame for the browser host
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameView {
    pub id: WindowId,
    pub title: String,
    pub component: Option<String>,
    /// Effective geometry (fullscreen resolved)
    pub rect: Rect,
    /// Where the frame is placed; off-canvas while minimized
    pub position: Vec2,
    pub visible: bool,
    pub fullscreen: bool,
    pub focused: bool,
    pub closable: bool,
    pub buttons: Vec<ChromeButton>,
}

/// Binding of one window record to the viewport and chrome layout
///
/// Borrowed per event or per render pass; never held across events, so it
/// always reflects the registry's current record.
pub struct Frame<'a> {
    info: &'a WindowInfo,
    viewport: &'a Viewport,
    style: &'a ChromeStyle,
}

impl<'a> Frame<'a> {
    /// Bind a window record
    pub fn new(info: &'a WindowInfo, viewport: &'a Viewport, style: &'a ChromeStyle) -> Self {
        Self { info, viewport, style }
    }

    /// The bound record
    #[inline]
    pub fn info(&self) -> &'a WindowInfo {
        self.info
    }

    /// Stored rectangle, or the viewport minus the footer when fullscreen
    pub fn effective_rect(&self) -> Rect {
        if self.info.fullscreen {
            self.viewport.fullscreen_rect(self.style)
        } else {
            self.info.rect
        }
    }

    /// Top-left corner the frame is drawn at
    ///
    /// Minimized frames keep their `x` and move far above the canvas so
    /// they stay in the render list.
    pub fn render_position(&self) -> Vec2 {
        let rect = self.effective_rect();
        if self.info.visible {
            rect.position()
        } else {
            Vec2::new(rect.x, OFFSCREEN_Y)
        }
    }

    /// Effective rectangle at its render position
    pub fn placed_rect(&self) -> Rect {
        self.effective_rect().with_position(self.render_position())
    }

    /// Title bar area
    pub fn title_bar_rect(&self) -> Rect {
        let placed = self.placed_rect();
        Rect::new(placed.x, placed.y, placed.width, self.style.header_height.min(placed.height))
    }

    /// Body area below the title bar; may be empty for very short frames
    pub fn body_rect(&self) -> Rect {
        let placed = self.placed_rect();
        let header = self.style.header_height;
        Rect::new(placed.x, placed.y + header, placed.width, placed.height - header)
    }

    /// Chrome buttons, right-aligned in the title bar
    ///
    /// Close sits at the right edge when the window is closable; the
    /// fullscreen and minimize buttons fill the slots to its left.
    pub fn buttons(&self) -> Vec<ChromeButton> {
        let bar = self.title_bar_rect();
        let side = self.style.header_height;
        let slot = |index: f32| Rect::new(bar.right() - side * (index + 1.0), bar.y, side, side);

        let mut regions = Vec::with_capacity(3);
        regions.push(WindowRegion::MinimizeButton);
        regions.push(WindowRegion::FullscreenButton);
        if self.info.closable {
            regions.push(WindowRegion::CloseButton);
        }

        let count = regions.len();
        regions
            .into_iter()
            .enumerate()
            .map(|(i, region)| ChromeButton {
                region,
                rect: slot((count - 1 - i) as f32),
            })
            .collect()
    }

    /// Bottom-right resize grip; fullscreen frames cannot be resized
    pub fn resize_grip_rect(&self) -> Option<Rect> {
        if self.info.fullscreen {
            return None;
        }
        let placed = self.placed_rect();
        let side = self.style.resize_handle_size;
        Some(Rect::new(placed.right() - side, placed.bottom() - side, side, side))
    }

    /// Find which region of the frame is under a canvas point
    pub fn hit_test(&self, pos: Vec2) -> Option<WindowRegion> {
        if !self.placed_rect().contains(pos) {
            return None;
        }

        if let Some(button) = self.buttons().into_iter().find(|b| b.rect.contains(pos)) {
            return Some(button.region);
        }
        if self.resize_grip_rect().is_some_and(|grip| grip.contains(pos)) {
            return Some(WindowRegion::ResizeGrip);
        }
        if self.title_bar_rect().contains(pos) {
            return Some(WindowRegion::TitleBar);
        }
        Some(WindowRegion::Content)
    }

    /// Draw list for this frame: chrome first, then the body
    pub fn draw(&self, ctx: &RenderContext) -> Vec<DrawCommand> {
        let bar = self.title_bar_rect();
        let header = self.style.header_height;
        let mut commands = vec![
            DrawCommand::sprite(assets::BAR, bar),
            DrawCommand::Text {
                text: self.info.title.clone(),
                position: Vec2::new(bar.x + self.style.title_padding, bar.y + header / 2.0),
                anchor: Vec2::new(0.0, 0.5),
                font_size: header * self.style.title_font_scale,
                color: TITLE_COLOR,
            },
        ];
        commands.extend(self.buttons().iter().map(|b| DrawCommand::sprite(b.asset(), b.rect)));

        let body = self.body_rect();
        if body.size().is_empty() {
            trace!(event = "desktop.frame.body_skipped", window_id = %self.info.id, height = body.height);
            return commands;
        }
        commands.push(DrawCommand::sprite(assets::BACKGROUND, body));
        if let Some(component) = self.info.component.as_deref() {
            commands.extend(component.draw(body, ctx));
        }
        commands
    }

    /// Serializable snapshot
    pub fn view(&self, focused: bool) -> FrameView {
        FrameView {
            id: self.info.id.clone(),
            title: self.info.title.clone(),
            component: self.info.component_kind().map(str::to_string),
            rect: self.effective_rect(),
            position: self.render_position(),
            visible: self.info.visible,
            fullscreen: self.info.fullscreen,
            focused,
            closable: self.info.closable,
            buttons: self.buttons(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use crate::window::Component;

    struct Probe;

    impl Component for Probe {
        fn kind(&self) -> &str {
            "probe"
        }

        fn draw(&self, area: Rect, _ctx: &RenderContext) -> Vec<DrawCommand> {
            vec![DrawCommand::Fill { rect: area, color: 0xff0000 }]
        }
    }

    fn clock() -> WindowInfo {
        WindowInfo::new("clock", "Clock", Rect::new(10.0, 10.0, 200.0, 150.0))
    }

    #[test]
    fn test_effective_rect_windowed() {
        let info = clock();
        let viewport = Viewport::new(1280.0, 720.0);
        let frame = Frame::new(&info, &viewport, &ChromeStyle::DEFAULT);

        assert_eq!(frame.effective_rect(), Rect::new(10.0, 10.0, 200.0, 150.0));
        assert_eq!(frame.render_position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_effective_rect_fullscreen_ignores_stored_rect() {
        let info = WindowInfo { fullscreen: true, ..clock() };
        let viewport = Viewport::new(1280.0, 720.0);
        let style = ChromeStyle::DEFAULT;
        let frame = Frame::new(&info, &viewport, &style);

        assert_eq!(frame.effective_rect(), Rect::new(0.0, 0.0, 1280.0, 720.0 - style.footer_height));
        assert_eq!(info.rect, Rect::new(10.0, 10.0, 200.0, 150.0));
    }

    #[test]
    fn test_minimized_frame_is_off_canvas() {
        let info = WindowInfo { visible: false, ..clock() };
        let viewport = Viewport::new(1280.0, 720.0);
        let frame = Frame::new(&info, &viewport, &ChromeStyle::DEFAULT);

        assert_eq!(frame.render_position(), Vec2::new(10.0, OFFSCREEN_Y));
        assert!(frame.hit_test(Vec2::new(20.0, 20.0)).is_none());
        assert!(!frame.draw(&RenderContext::default()).is_empty());
    }

    #[test]
    fn test_buttons_closable() {
        let info = clock();
        let viewport = Viewport::default();
        let style = ChromeStyle::DEFAULT;
        let frame = Frame::new(&info, &viewport, &style);
        let h = style.header_height;

        let buttons = frame.buttons();
        assert_eq!(buttons.len(), 3);
        assert_eq!(buttons[2].region, WindowRegion::CloseButton);
        assert!((buttons[2].rect.right() - 210.0).abs() < 0.001);
        assert_eq!(buttons[1].region, WindowRegion::FullscreenButton);
        assert!((buttons[1].rect.x - (210.0 - 2.0 * h)).abs() < 0.001);
        assert_eq!(buttons[0].region, WindowRegion::MinimizeButton);
        assert!((buttons[0].rect.x - (210.0 - 3.0 * h)).abs() < 0.001);
    }

    #[test]
    fn test_buttons_not_closable_shift_right() {
        let info = WindowInfo { closable: false, ..clock() };
        let viewport = Viewport::default();
        let style = ChromeStyle::DEFAULT;
        let frame = Frame::new(&info, &viewport, &style);

        let buttons = frame.buttons();
        assert_eq!(buttons.len(), 2);
        assert!(buttons.iter().all(|b| b.region != WindowRegion::CloseButton));
        assert_eq!(buttons[1].region, WindowRegion::FullscreenButton);
        assert!((buttons[1].rect.right() - 210.0).abs() < 0.001);
    }

    #[test]
    fn test_hit_test_regions() {
        let info = clock();
        let viewport = Viewport::default();
        let style = ChromeStyle::DEFAULT;
        let frame = Frame::new(&info, &viewport, &style);

        assert_eq!(frame.hit_test(Vec2::new(15.0, 15.0)), Some(WindowRegion::TitleBar));
        assert_eq!(frame.hit_test(Vec2::new(205.0, 15.0)), Some(WindowRegion::CloseButton));
        assert_eq!(frame.hit_test(Vec2::new(50.0, 100.0)), Some(WindowRegion::Content));
        assert_eq!(frame.hit_test(Vec2::new(205.0, 155.0)), Some(WindowRegion::ResizeGrip));
        assert_eq!(frame.hit_test(Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_fullscreen_has_no_resize_grip() {
        let info = WindowInfo { fullscreen: true, ..clock() };
        let viewport = Viewport::new(800.0, 600.0);
        let frame = Frame::new(&info, &viewport, &ChromeStyle::DEFAULT);

        assert!(frame.resize_grip_rect().is_none());
        assert_eq!(frame.hit_test(Vec2::new(795.0, 555.0)), Some(WindowRegion::Content));
    }

    #[test]
    fn test_draw_invokes_component_with_body() {
        let info = clock().with_component(Rc::new(Probe));
        let viewport = Viewport::default();
        let style = ChromeStyle::DEFAULT;
        let frame = Frame::new(&info, &viewport, &style);

        let commands = frame.draw(&RenderContext::default());
        let body = Rect::new(10.0, 10.0 + style.header_height, 200.0, 150.0 - style.header_height);

        assert_eq!(commands[0].asset(), Some(assets::BAR));
        assert!(matches!(&commands[1], DrawCommand::Text { text, .. } if text == "Clock"));
        assert_eq!(commands.last(), Some(&DrawCommand::Fill { rect: body, color: 0xff0000 }));
    }

    #[test]
    fn test_draw_skips_empty_body() {
        let style = ChromeStyle::DEFAULT;
        let info = WindowInfo::new("bar", "Bar", Rect::new(0.0, 0.0, 200.0, style.header_height))
            .with_component(Rc::new(Probe));
        let viewport = Viewport::default();
        let frame = Frame::new(&info, &viewport, &style);

        let commands = frame.draw(&RenderContext::default());
        assert!(commands.iter().all(|c| !matches!(c, DrawCommand::Fill { .. })));
        assert!(commands.iter().all(|c| c.asset() != Some(assets::BACKGROUND)));
    }

    #[test]
    fn test_view_snapshot() {
        let info = WindowInfo { visible: false, ..clock() }.with_component(Rc::new(Probe));
        let viewport = Viewport::default();
        let frame = Frame::new(&info, &viewport, &ChromeStyle::DEFAULT);

        let view = frame.view(false);
        assert_eq!(view.component.as_deref(), Some("probe"));
        assert!(!view.visible);
        assert!((view.position.y - OFFSCREEN_Y).abs() < 0.001);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "clock");
        assert_eq!(json["fullscreen"], false);
    }
}
