//! Window templates

use serde::{Deserialize, Serialize};
use crate::error::DesktopResult;
use crate::math::Rect;
use crate::window::{WindowId, WindowInfo};
use super::ComponentFactory;

fn yes() -> bool {
    true
}

/// Initial state for a window, before it is opened
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowTemplate {
    pub id: WindowId,
    pub title: String,
    /// Component key resolved through a [`ComponentFactory`]
    #[serde(default)]
    pub component: Option<String>,
    pub rect: Rect,
    #[serde(default = "yes")]
    pub visible: bool,
    #[serde(default)]
    pub fullscreen: bool,
    #[serde(default = "yes")]
    pub closable: bool,
    #[serde(default)]
    pub content_interactive: bool,
    /// Open when the desktop starts rather than on icon activation
    #[serde(default = "yes")]
    pub autostart: bool,
}

impl WindowTemplate {
    /// Build the window record, resolving the component key
    pub fn instantiate(&self, factory: &ComponentFactory) -> DesktopResult<WindowInfo> {
        let component = self.component.as_deref().map(|key| factory.get(key)).transpose()?;
        Ok(WindowInfo {
            id: self.id.clone(),
            title: self.title.clone(),
            component,
            rect: self.rect,
            visible: self.visible,
            fullscreen: self.fullscreen,
            closable: self.closable,
            content_interactive: self.content_interactive,
        })
    }
}

/// The set of windows the desktop knows how to open
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowCatalog {
    templates: Vec<WindowTemplate>,
}

impl Default for WindowCatalog {
    fn default() -> Self {
        Self::new(default_templates())
    }
}

impl WindowCatalog {
    /// Catalog from a list of templates
    pub fn new(templates: Vec<WindowTemplate>) -> Self {
        Self { templates }
    }

    /// Parse a JSON array of templates
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Template for an id
    pub fn get(&self, id: &str) -> Option<&WindowTemplate> {
        self.templates.iter().find(|t| t.id.as_str() == id)
    }

    /// Templates opened at startup, in catalog order
    pub fn autostart(&self) -> impl Iterator<Item = &WindowTemplate> {
        self.templates.iter().filter(|t| t.autostart)
    }
}

/// Windows of a fresh desktop
///
/// The visualizer covers the screen and cannot be closed; the clock floats
/// above it. The readme only opens from its icon.
pub fn default_templates() -> Vec<WindowTemplate> {
    let base = Rect::new(0.0, 0.0, 500.0, 500.0);
    vec![
        WindowTemplate {
            id: WindowId::from("visualizer"),
            title: "Visualizer".to_string(),
            component: Some("visualizer".to_string()),
            rect: base,
            visible: true,
            fullscreen: true,
            closable: false,
            content_interactive: false,
            autostart: true,
        },
        WindowTemplate {
            id: WindowId::from("clock"),
            title: "Clock".to_string(),
            component: Some("clock".to_string()),
            rect: base,
            visible: true,
            fullscreen: false,
            closable: true,
            content_interactive: false,
            autostart: true,
        },
        WindowTemplate {
            id: WindowId::from("readme"),
            title: "Readme.txt".to_string(),
            component: Some("readme".to_string()),
            rect: Rect::new(60.0, 60.0, 420.0, 300.0),
            visible: true,
            fullscreen: false,
            closable: true,
            content_interactive: true,
            autostart: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesktopError;

    #[test]
    fn test_default_catalog() {
        let catalog = WindowCatalog::default();
        let autostart: Vec<&str> = catalog.autostart().map(|t| t.id.as_str()).collect();
        assert_eq!(autostart, ["visualizer", "clock"]);

        let visualizer = catalog.get("visualizer").unwrap();
        assert!(visualizer.fullscreen);
        assert!(!visualizer.closable);
        assert!(catalog.get("readme").is_some());
        assert!(catalog.get("crt").is_none());
    }

    #[test]
    fn test_instantiate_resolves_component() {
        let factory = ComponentFactory::with_builtins();
        let info = WindowCatalog::default().get("clock").unwrap().instantiate(&factory).unwrap();

        assert_eq!(info.component_kind(), Some("clock"));
        assert_eq!(info.rect, Rect::new(0.0, 0.0, 500.0, 500.0));
        assert!(info.closable);
    }

    #[test]
    fn test_instantiate_unknown_component() {
        let template = WindowTemplate {
            component: Some("crt".to_string()),
            ..default_templates().remove(1)
        };
        let err = template.instantiate(&ComponentFactory::new()).unwrap_err();
        assert_eq!(err, DesktopError::UnknownComponent("crt".to_string()));
    }

    #[test]
    fn test_from_json_applies_defaults() {
        let catalog = WindowCatalog::from_json(
            r#"[{ "id": "notes", "title": "Notes", "rect": { "x": 5, "y": 5, "width": 300, "height": 200 } }]"#,
        )
        .unwrap();

        let notes = catalog.get("notes").unwrap();
        assert!(notes.visible);
        assert!(notes.closable);
        assert!(notes.autostart);
        assert!(!notes.fullscreen);
        assert!(notes.component.is_none());
    }
}
