//! Component lookup by key

use std::collections::HashMap;
use std::rc::Rc;
use crate::components::{Clock, TextDocument, Visualizer};
use crate::error::{DesktopError, DesktopResult};
use crate::window::Component;

const README: &str = "CRT desktop\n\nDrag a window by its title bar.\nUse the buttons to minimize, go fullscreen or close.";

/// Shared component instances keyed by catalog name
///
/// The factory owns the components; window records only hold `Rc` handles,
/// so a component outlives any window that shows it.
#[derive(Default)]
pub struct ComponentFactory {
    components: HashMap<String, Rc<dyn Component>>,
}

impl ComponentFactory {
    /// Create an empty factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory holding the built-in components
    pub fn with_builtins() -> Self {
        let mut factory = Self::new();
        factory.register("clock", Rc::new(Clock::default()));
        factory.register("visualizer", Rc::new(Visualizer));
        factory.register("readme", Rc::new(TextDocument::new(README)));
        factory
    }

    /// Register (or replace) a component under a key
    pub fn register(&mut self, key: impl Into<String>, component: Rc<dyn Component>) {
        self.components.insert(key.into(), component);
    }

    /// Shared handle for a key
    pub fn get(&self, key: &str) -> DesktopResult<Rc<dyn Component>> {
        self.components
            .get(key)
            .cloned()
            .ok_or_else(|| DesktopError::UnknownComponent(key.to_string()))
    }
}
