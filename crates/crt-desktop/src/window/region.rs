//! Window region for hit testing

use serde::Serialize;

/// Region of a frame under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Body area
    Content,
    /// Close (kill) button
    CloseButton,
    /// Minimize button
    MinimizeButton,
    /// Fullscreen toggle button
    FullscreenButton,
    /// Bottom-right resize grip
    ResizeGrip,
}

impl WindowRegion {
    /// Check if this is a chrome button
    #[inline]
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::FullscreenButton
        )
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self, content_interactive: bool) -> &'static str {
        match self {
            region if region.is_button() => "pointer",
            WindowRegion::Content if content_interactive => "default",
            WindowRegion::ResizeGrip => "nwse-resize",
            _ => "move",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons() {
        assert!(WindowRegion::CloseButton.is_button());
        assert!(WindowRegion::FullscreenButton.is_button());
        assert!(!WindowRegion::TitleBar.is_button());
        assert!(!WindowRegion::ResizeGrip.is_button());
    }

    #[test]
    fn test_cursor() {
        assert_eq!(WindowRegion::TitleBar.cursor(false), "move");
        assert_eq!(WindowRegion::Content.cursor(false), "move");
        assert_eq!(WindowRegion::Content.cursor(true), "default");
        assert_eq!(WindowRegion::MinimizeButton.cursor(true), "pointer");
        assert_eq!(WindowRegion::ResizeGrip.cursor(false), "nwse-resize");
    }
}
