//! Launcher icon catalog

use serde::{Deserialize, Serialize};
use crate::window::WindowId;

/// A desktop icon that opens (or re-shows) a window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconInfo {
    /// Image asset key
    pub src: String,
    /// Window the icon activates
    pub id: WindowId,
    /// Label under the icon
    pub title: String,
}

impl IconInfo {
    fn new(src: &str, id: &str, title: &str) -> Self {
        Self {
            src: src.to_string(),
            id: WindowId::from(id),
            title: title.to_string(),
        }
    }
}

/// Icons shown on a fresh desktop
pub fn default_icons() -> Vec<IconInfo> {
    vec![
        IconInfo::new("visualizer-icon", "visualizer", "Visualizer"),
        IconInfo::new("clock-icon", "clock", "Clock.exe"),
        IconInfo::new("clock-icon", "readme", "Readme.txt"),
    ]
}
