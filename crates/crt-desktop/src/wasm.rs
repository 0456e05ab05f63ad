//! WASM exports for the window manager
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! allowing the canvas host to drive the desktop directly.

use wasm_bindgen::prelude::*;

use crate::catalog::{ComponentFactory, WindowCatalog};
use crate::config::DesktopConfig;
use crate::engine::DesktopEngine;
use crate::error::DesktopError;
use crate::window::RenderContext;

const UNHANDLED_JSON: &str = r#"{"type":"unhandled"}"#;

/// Report to the browser console and hand the message back to JS
fn to_js(e: DesktopError) -> JsValue {
    let message = JsValue::from_str(&e.to_string());
    web_sys::console::warn_1(&message);
    message
}

/// Desktop handle for WASM - wraps DesktopEngine with a JS-friendly API
#[wasm_bindgen]
pub struct DesktopHandle {
    engine: DesktopEngine,
}

#[wasm_bindgen]
impl DesktopHandle {
    /// Create a desktop with the default catalog and configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<DesktopHandle, JsValue> {
        console_error_panic_hook::set_once();
        let engine = DesktopEngine::standard().map_err(to_js)?;
        Ok(Self { engine })
    }

    /// Create a desktop from JSON configuration and catalog documents
    #[wasm_bindgen]
    pub fn from_json(config_json: &str, catalog_json: &str) -> Result<DesktopHandle, JsValue> {
        console_error_panic_hook::set_once();
        let config = DesktopConfig::from_json(config_json).map_err(to_js)?;
        let catalog = WindowCatalog::from_json(catalog_json).map_err(to_js)?;
        let engine = DesktopEngine::with_catalog(config, catalog, ComponentFactory::with_builtins())
            .map_err(to_js)?;
        Ok(Self { engine })
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Resize the canvas
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle pointer down event
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u8) -> String {
        let result = self.engine.handle_pointer_down(x, y, button);
        serde_json::to_string(&result).unwrap_or_else(|_| UNHANDLED_JSON.to_string())
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_move(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| UNHANDLED_JSON.to_string())
    }

    /// Handle pointer up event
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        let result = self.engine.handle_pointer_up();
        serde_json::to_string(&result).unwrap_or_else(|_| UNHANDLED_JSON.to_string())
    }

    /// CSS cursor for a canvas point
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        self.engine.cursor_at(x, y).to_string()
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Minimize a window
    #[wasm_bindgen]
    pub fn minimize(&mut self, id: &str) -> Result<(), JsValue> {
        self.engine.minimize_window(id).map_err(to_js)
    }

    /// Restore a minimized window
    #[wasm_bindgen]
    pub fn restore(&mut self, id: &str) -> Result<(), JsValue> {
        self.engine.restore_window(id).map_err(to_js)
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn kill(&mut self, id: &str) -> Result<(), JsValue> {
        self.engine.kill_window(id).map_err(to_js)
    }

    /// Toggle fullscreen, returning the new state
    #[wasm_bindgen]
    pub fn toggle_fullscreen(&mut self, id: &str) -> Result<bool, JsValue> {
        self.engine.toggle_fullscreen(id).map_err(to_js)
    }

    /// Raise a window
    #[wasm_bindgen]
    pub fn focus(&mut self, id: &str) -> Result<(), JsValue> {
        self.engine.focus_window(id).map_err(to_js)
    }

    /// Launch or re-show a window from its desktop icon
    #[wasm_bindgen]
    pub fn activate_icon(&mut self, id: &str) -> Result<(), JsValue> {
        self.engine.activate_icon(id).map_err(to_js)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Frame list as JSON, rear to front
    #[wasm_bindgen]
    pub fn frames_json(&self) -> String {
        serde_json::to_string(&self.engine.frames()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Desktop icons as JSON
    #[wasm_bindgen]
    pub fn icons_json(&self) -> String {
        serde_json::to_string(&self.engine.icons).unwrap_or_else(|_| "[]".to_string())
    }

    /// Draw list as JSON for an explicit time
    #[wasm_bindgen]
    pub fn draw_json(&self, time_ms: f64) -> String {
        let commands = self.engine.draw(&RenderContext::at(time_ms));
        serde_json::to_string(&commands).unwrap_or_else(|_| "[]".to_string())
    }

    /// Draw list as JSON for the current wall clock
    #[wasm_bindgen]
    pub fn tick(&self) -> String {
        self.draw_json(js_sys::Date::now())
    }
}
