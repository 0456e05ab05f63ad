//! Window management module
//!
//! Provides the window record, the component capability, the registry
//! with its z-order stack, and chrome regions for hit testing.

mod component;
mod info;
mod region;
mod registry;

pub use component::{Component, RenderContext};
pub use info::WindowInfo;
pub use region::WindowRegion;
pub use registry::WindowRegistry;

use serde::{Deserialize, Serialize};

/// Unique window identifier
///
/// Ids are short stable strings (`"clock"`, `"visualizer"`) taken from the
/// window catalog and never reused while the window is open.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Create an id from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::borrow::Borrow<str> for WindowId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
