//! Desktop configuration

use serde::{Deserialize, Serialize};
use crate::error::DesktopResult;
use crate::math::{ChromeStyle, Size};

/// Startup configuration for a [`DesktopEngine`](crate::DesktopEngine)
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// # use crt_desktop::DesktopConfig;
/// let config = DesktopConfig::from_json(r#"{ "chrome": { "footer_height": 32 } }"#).unwrap();
/// assert_eq!(config.chrome.footer_height, 32.0);
/// assert_eq!(config.chrome.header_height, 24.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Initial canvas size
    pub viewport: Size,
    /// Chrome and footer layout
    pub chrome: ChromeStyle,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(1920.0, 1080.0),
            chrome: ChromeStyle::DEFAULT,
        }
    }
}

impl DesktopConfig {
    /// Parse a configuration document
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
