//! Pointer event routing

use tracing::{debug, warn};
use crate::error::DesktopResult;
use crate::frame::Frame;
use crate::input::InputResult;
use crate::math::Vec2;
use crate::window::{WindowId, WindowRegion};
use super::DesktopEngine;

impl DesktopEngine {
    /// Handle pointer down
    ///
    /// Only the primary button acts. Presses arriving while a session is
    /// active are ignored.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, button: u8) -> InputResult {
        if button != 0 {
            return InputResult::Unhandled;
        }
        if self.input.is_dragging() {
            debug!(event = "desktop.input.press_ignored", reason = "session_active");
            return InputResult::Unhandled;
        }

        let pos = Vec2::new(x, y);
        let Some((window_id, region)) = self.region_at(pos) else {
            return InputResult::Unhandled;
        };

        match region {
            WindowRegion::CloseButton => chrome_action(self.kill_window(window_id.as_str())),
            WindowRegion::MinimizeButton => chrome_action(self.minimize_window(window_id.as_str())),
            WindowRegion::FullscreenButton => {
                chrome_action(self.toggle_fullscreen(window_id.as_str()).map(|_| ()))
            }
            WindowRegion::TitleBar => self.handle_title_bar_press(&window_id, pos),
            WindowRegion::Content => self.handle_content_press(&window_id, pos),
            WindowRegion::ResizeGrip => {
                self.raise(&window_id);
                self.input.on_resize_press(&self.registry, window_id.as_str(), pos)
            }
        }
    }

    /// Handle pointer move anywhere on the canvas
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        self.input.on_move(&mut self.registry, Vec2::new(x, y))
    }

    /// Handle pointer up anywhere on the canvas
    pub fn handle_pointer_up(&mut self) -> InputResult {
        self.input.on_release()
    }

    /// Cursor shape for a canvas point
    pub fn cursor_at(&self, x: f32, y: f32) -> &'static str {
        let pos = Vec2::new(x, y);
        let frame = self.frame_at(pos);
        self.input.hover_cursor(frame.as_ref(), pos)
    }

    /// Topmost visible frame containing a canvas point
    fn frame_at(&self, pos: Vec2) -> Option<Frame<'_>> {
        self.registry
            .iter_by_z()
            .rev()
            .filter(|w| w.visible)
            .map(|w| Frame::new(w, &self.viewport, &self.style))
            .find(|frame| frame.hit_test(pos).is_some())
    }

    /// Window and region under a canvas point
    fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        let frame = self.frame_at(pos)?;
        let region = frame.hit_test(pos)?;
        Some((frame.info().id.clone(), region))
    }

    /// Title bar press: focus, then start a move
    fn handle_title_bar_press(&mut self, window_id: &WindowId, pos: Vec2) -> InputResult {
        self.raise(window_id);
        self.input.on_press(&self.registry, window_id.as_str(), pos)
    }

    /// Body press: forward to interactive content, otherwise drag the frame
    fn handle_content_press(&mut self, window_id: &WindowId, pos: Vec2) -> InputResult {
        self.raise(window_id);

        let Some(window) = self.registry.get(window_id.as_str()) else {
            return InputResult::Unhandled;
        };
        if !window.content_interactive {
            return self.input.on_press(&self.registry, window_id.as_str(), pos);
        }

        let body = Frame::new(window, &self.viewport, &self.style).body_rect();
        InputResult::Forward {
            window_id: window_id.clone(),
            local_x: pos.x - body.x,
            local_y: pos.y - body.y,
        }
    }

    fn raise(&mut self, window_id: &WindowId) {
        if let Err(e) = self.registry.focus(window_id.as_str()) {
            warn!(event = "desktop.input.focus_failed", window_id = %window_id, error = %e);
        }
    }
}

fn chrome_action(result: DesktopResult<()>) -> InputResult {
    match result {
        Ok(()) => InputResult::Handled,
        Err(e) => {
            warn!(event = "desktop.input.chrome_action_failed", error = %e);
            InputResult::Unhandled
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DesktopConfig;
    use crate::engine::DesktopEngine;
    use crate::input::InputResult;
    use crate::math::{Rect, Vec2};
    use crate::window::{WindowId, WindowInfo};

    fn engine_with(windows: Vec<WindowInfo>) -> DesktopEngine {
        let mut engine = DesktopEngine::new(DesktopConfig::default());
        for window in windows {
            engine.open_window(window).unwrap();
        }
        engine
    }

    fn clock() -> WindowInfo {
        WindowInfo::new("clock", "Clock", Rect::new(10.0, 10.0, 200.0, 150.0))
    }

    #[test]
    fn test_title_bar_drag() {
        let mut engine = engine_with(vec![clock()]);

        assert_eq!(engine.handle_pointer_down(15.0, 15.0, 0), InputResult::Handled);
        assert_eq!(engine.handle_pointer_move(100.0, 80.0), InputResult::Handled);
        assert_eq!(engine.registry().get("clock").unwrap().rect.position(), Vec2::new(95.0, 75.0));

        assert_eq!(engine.handle_pointer_up(), InputResult::Handled);
        assert_eq!(engine.handle_pointer_move(300.0, 300.0), InputResult::Unhandled);
        assert_eq!(engine.registry().get("clock").unwrap().rect.position(), Vec2::new(95.0, 75.0));
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut engine = engine_with(vec![clock()]);
        assert_eq!(engine.handle_pointer_down(15.0, 15.0, 2), InputResult::Unhandled);
        assert!(!engine.input().is_dragging());
    }

    #[test]
    fn test_press_on_empty_canvas() {
        let mut engine = engine_with(vec![clock()]);
        assert_eq!(engine.handle_pointer_down(900.0, 900.0, 0), InputResult::Unhandled);
    }

    #[test]
    fn test_press_hits_topmost_and_focuses() {
        let back = WindowInfo::new("back", "Back", Rect::new(0.0, 0.0, 300.0, 300.0));
        let front = WindowInfo::new("front", "Front", Rect::new(100.0, 100.0, 300.0, 300.0));
        let mut engine = engine_with(vec![back, front]);

        // overlap goes to the front window
        engine.handle_pointer_down(150.0, 105.0, 0);
        assert_eq!(engine.input().active_window().map(|id| id.as_str()), Some("front"));
        engine.handle_pointer_up();

        // back window is raised when pressed
        engine.handle_pointer_down(5.0, 5.0, 0);
        assert_eq!(engine.registry().focused().map(|id| id.as_str()), Some("back"));
    }

    #[test]
    fn test_chrome_buttons() {
        let mut engine = engine_with(vec![clock()]);
        // right edge of the 24px bar is x = 210; close, fullscreen, minimize
        assert_eq!(engine.handle_pointer_down(160.0, 20.0, 0), InputResult::Handled);
        assert!(!engine.registry().get("clock").unwrap().visible);
        assert!(!engine.input().is_dragging());

        engine.restore_window("clock").unwrap();
        engine.handle_pointer_down(180.0, 20.0, 0);
        assert!(engine.registry().get("clock").unwrap().fullscreen);
        assert_eq!(engine.registry().get("clock").unwrap().rect, Rect::new(10.0, 10.0, 200.0, 150.0));

        engine.toggle_fullscreen("clock").unwrap();
        engine.handle_pointer_down(205.0, 20.0, 0);
        assert!(!engine.registry().contains("clock"));
    }

    #[test]
    fn test_press_on_fullscreen_window_starts_nothing() {
        let other = WindowInfo::new("other", "Other", Rect::new(400.0, 400.0, 200.0, 150.0));
        let mut engine = engine_with(vec![clock(), other]);
        engine.toggle_fullscreen("clock").unwrap();
        engine.focus_window("clock").unwrap();

        assert_eq!(engine.handle_pointer_down(15.0, 15.0, 0), InputResult::Unhandled);
        assert_eq!(engine.handle_pointer_down(300.0, 300.0, 0), InputResult::Unhandled);
        assert!(!engine.input().is_dragging());
        assert_eq!(engine.registry().focused().map(|id| id.as_str()), Some("clock"));
    }

    #[test]
    fn test_minimized_window_not_hit() {
        let mut engine = engine_with(vec![clock()]);
        engine.minimize_window("clock").unwrap();
        assert_eq!(engine.handle_pointer_down(15.0, 15.0, 0), InputResult::Unhandled);
    }

    #[test]
    fn test_body_press_drags_by_default() {
        let mut engine = engine_with(vec![clock()]);
        engine.handle_pointer_down(50.0, 100.0, 0);
        assert!(engine.input().is_dragging());
    }

    #[test]
    fn test_interactive_body_forwards() {
        let readme = WindowInfo {
            content_interactive: true,
            ..WindowInfo::new("readme", "Readme.txt", Rect::new(60.0, 60.0, 420.0, 300.0))
        };
        let mut engine = engine_with(vec![readme]);

        let result = engine.handle_pointer_down(70.0, 100.0, 0);
        assert_eq!(
            result,
            InputResult::Forward {
                window_id: WindowId::from("readme"),
                local_x: 10.0,
                local_y: 16.0,
            }
        );
        assert!(!engine.input().is_dragging());
    }

    #[test]
    fn test_press_during_session_ignored() {
        let other = WindowInfo::new("other", "Other", Rect::new(400.0, 400.0, 200.0, 150.0));
        let mut engine = engine_with(vec![clock(), other]);

        engine.handle_pointer_down(15.0, 15.0, 0);
        assert_eq!(engine.handle_pointer_down(405.0, 405.0, 0), InputResult::Unhandled);
        assert_eq!(engine.input().active_window().map(|id| id.as_str()), Some("clock"));
    }

    #[test]
    fn test_resize_grip() {
        let mut engine = engine_with(vec![clock()]);
        // grip is the 10px square at the bottom-right corner (210, 160)
        engine.handle_pointer_down(205.0, 155.0, 0);
        engine.handle_pointer_move(255.0, 185.0);

        let rect = engine.registry().get("clock").unwrap().rect;
        assert!((rect.width - 250.0).abs() < 0.001);
        assert!((rect.height - 180.0).abs() < 0.001);
        assert_eq!(rect.position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_cursor_at() {
        let mut engine = engine_with(vec![clock()]);
        assert_eq!(engine.cursor_at(15.0, 15.0), "move");
        assert_eq!(engine.cursor_at(205.0, 155.0), "nwse-resize");
        assert_eq!(engine.cursor_at(900.0, 900.0), "default");

        engine.handle_pointer_down(15.0, 15.0, 0);
        assert_eq!(engine.cursor_at(900.0, 900.0), "move");
        engine.handle_pointer_up();

        engine.handle_pointer_down(205.0, 155.0, 0);
        assert_eq!(engine.cursor_at(15.0, 15.0), "nwse-resize");
    }
}
