//! Window record

use std::rc::Rc;
use crate::math::Rect;
use super::{Component, WindowId};

/// State of one open window
///
/// Records are replaced wholesale through
/// [`WindowRegistry::update`](super::WindowRegistry::update); build the
/// replacement from a fresh read with struct-update syntax:
///
/// ```rust
/// # use crt_desktop::{WindowInfo, Rect};
/// # let current = WindowInfo::new("clock", "Clock", Rect::new(0.0, 0.0, 500.0, 500.0));
/// let moved = WindowInfo {
///     rect: current.rect.with_position((95.0, 75.0).into()),
///     ..current.clone()
/// };
/// ```
#[derive(Clone)]
pub struct WindowInfo {
    /// Registry key
    pub id: WindowId,
    /// Title bar text
    pub title: String,
    /// Body renderer, `None` for an empty body
    pub component: Option<Rc<dyn Component>>,
    /// Stored geometry, ignored for rendering while fullscreen
    pub rect: Rect,
    /// False while minimized; the frame is then drawn off-canvas
    pub visible: bool,
    /// Render over the whole viewport minus the footer band
    pub fullscreen: bool,
    /// Whether the close control is offered
    pub closable: bool,
    /// Forward body presses to the component instead of dragging the frame
    pub content_interactive: bool,
}

impl WindowInfo {
    /// Create a visible, windowed, closable record with an empty body
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            component: None,
            rect,
            visible: true,
            fullscreen: false,
            closable: true,
            content_interactive: false,
        }
    }

    /// Attach a body component
    pub fn with_component(mut self, component: Rc<dyn Component>) -> Self {
        self.component = Some(component);
        self
    }

    /// Component kind key, if a component is attached
    pub fn component_kind(&self) -> Option<&str> {
        self.component.as_deref().map(|c| c.kind())
    }
}

impl std::fmt::Debug for WindowInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowInfo")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("component", &self.component_kind())
            .field("rect", &self.rect)
            .field("visible", &self.visible)
            .field("fullscreen", &self.fullscreen)
            .field("closable", &self.closable)
            .field("content_interactive", &self.content_interactive)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::DrawCommand;
    use crate::window::RenderContext;

    struct Blank;

    impl Component for Blank {
        fn kind(&self) -> &str {
            "blank"
        }

        fn draw(&self, _area: Rect, _ctx: &RenderContext) -> Vec<DrawCommand> {
            Vec::new()
        }
    }

    #[test]
    fn test_new_defaults() {
        let info = WindowInfo::new("clock", "Clock", Rect::new(0.0, 0.0, 500.0, 500.0));
        assert_eq!(info.id.as_str(), "clock");
        assert!(info.visible);
        assert!(!info.fullscreen);
        assert!(info.closable);
        assert!(info.component.is_none());
    }

    #[test]
    fn test_clone_shares_component() {
        let component: Rc<dyn Component> = Rc::new(Blank);
        let info = WindowInfo::new("clock", "Clock", Rect::new(0.0, 0.0, 500.0, 500.0))
            .with_component(component.clone());

        let copy = WindowInfo { visible: false, ..info.clone() };

        assert_eq!(copy.component_kind(), Some("blank"));
        // original handle, the record and its copy
        assert_eq!(Rc::strong_count(&component), 3);
    }
}
