//! Error types for the window manager core
//!
//! Every fallible registry, catalog and configuration operation returns
//! [`DesktopResult`]. Pointer handling never surfaces these: a drag on a
//! window that has disappeared is absorbed, not reported.

use crate::window::WindowId;

/// Errors that can occur in desktop operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DesktopError {
    /// A mutation addressed an id that is not in the registry
    #[error("window not found: {0}")]
    WindowNotFound(WindowId),

    /// A window was opened under an id that is already live
    #[error("window already open: {0}")]
    DuplicateWindow(WindowId),

    /// A replacement record carried a different id than the slot it targets
    #[error("window id mismatch: expected {expected}, found {found}")]
    IdMismatch {
        /// The id being updated
        expected: WindowId,
        /// The id carried by the replacement
        found: WindowId,
    },

    /// A rectangle with non-positive or non-finite dimensions
    #[error("degenerate geometry for window {id}: {width}x{height}")]
    DegenerateGeometry {
        /// Window the rectangle was meant for
        id: WindowId,
        /// Rejected width
        width: f32,
        /// Rejected height
        height: f32,
    },

    /// The close control was requested for a window that has none
    #[error("window cannot be closed: {0}")]
    NotClosable(WindowId),

    /// A catalog entry names a component the factory does not know
    #[error("unknown component: {0}")]
    UnknownComponent(String),

    /// An icon was activated for an id with no window template
    #[error("no window template for: {0}")]
    UnknownTemplate(WindowId),

    /// Configuration or catalog JSON failed to parse
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        DesktopError::Config(e.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
