//! Window manager core for the CRT desktop
//!
//! This crate provides the state and interaction logic behind a simulated
//! desktop drawn on a single canvas:
//! - Window registry (open, update, minimize, fullscreen, kill, z-order)
//! - Pointer drag and resize sessions
//! - Frame layout, hit testing and draw lists
//! - Window and icon catalogs for launching windows
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Rect`, `Size`) and chrome layout
//! - [`window`]: Window records, the component capability and the registry
//! - [`input`]: Drag state machine and input results
//! - [`frame`]: Window records resolved for rendering
//! - [`catalog`]: Window templates, icons and the component factory
//! - [`components`]: Built-in window bodies
//!
//! ## Example
//!
//! ```rust
//! use crt_desktop::{DesktopConfig, DesktopEngine, Rect, Vec2, WindowInfo};
//!
//! let mut engine = DesktopEngine::new(DesktopConfig::default());
//! engine
//!     .open_window(WindowInfo::new("clock", "Clock", Rect::new(10.0, 10.0, 200.0, 150.0)))
//!     .unwrap();
//!
//! engine.handle_pointer_down(15.0, 15.0, 0);
//! engine.handle_pointer_move(100.0, 80.0);
//! engine.handle_pointer_up();
//!
//! let clock = engine.registry().get("clock").unwrap();
//! assert_eq!(clock.rect.position(), Vec2::new(95.0, 75.0));
//! ```

pub mod math;
pub mod window;
pub mod input;
pub mod frame;
pub mod catalog;
pub mod components;

mod config;
mod engine;
mod error;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{ChromeStyle, Rect, Size, Vec2};
pub use window::{Component, RenderContext, WindowId, WindowInfo, WindowRegion, WindowRegistry};
pub use input::{DragState, InputResult, PointerController};
pub use frame::{ChromeButton, DrawCommand, Frame, FrameView, OFFSCREEN_Y};
pub use catalog::{ComponentFactory, IconInfo, WindowCatalog, WindowTemplate};

pub use config::DesktopConfig;
pub use engine::DesktopEngine;
pub use error::{DesktopError, DesktopResult};
pub use viewport::Viewport;
