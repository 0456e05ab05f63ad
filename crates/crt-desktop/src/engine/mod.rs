//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `input`: Pointer event routing and drag sessions
//! - `windows`: Window lifecycle and operations
//! - `rendering`: Frame snapshots and draw lists

mod input;
mod windows;
mod rendering;

use tracing::info;
use crate::catalog::{default_icons, ComponentFactory, IconInfo, WindowCatalog};
use crate::config::DesktopConfig;
use crate::error::DesktopResult;
use crate::input::PointerController;
use crate::math::ChromeStyle;
use crate::viewport::Viewport;
use crate::window::WindowRegistry;

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Viewport (canvas size reported by the host)
/// - Window registry (window records and z-order)
/// - Pointer controller (the single drag/resize session)
/// - Window catalog and component factory (icon launches)
pub struct DesktopEngine {
    /// Canvas the frames are laid out on
    pub viewport: Viewport,
    /// Launcher icons
    pub icons: Vec<IconInfo>,
    pub(crate) style: ChromeStyle,
    pub(crate) registry: WindowRegistry,
    pub(crate) input: PointerController,
    pub(crate) catalog: WindowCatalog,
    pub(crate) factory: ComponentFactory,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl DesktopEngine {
    /// Create an engine with no open windows
    ///
    /// Icons still launch from the default catalog with the built-in
    /// components.
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            viewport: Viewport::new(config.viewport.width, config.viewport.height),
            icons: default_icons(),
            style: config.chrome,
            registry: WindowRegistry::new(),
            input: PointerController::new(config.chrome.min_window_size),
            catalog: WindowCatalog::default(),
            factory: ComponentFactory::with_builtins(),
        }
    }

    /// Create an engine and open every autostart template, in catalog order
    pub fn with_catalog(
        config: DesktopConfig,
        catalog: WindowCatalog,
        factory: ComponentFactory,
    ) -> DesktopResult<Self> {
        let mut engine = Self {
            catalog,
            factory,
            ..Self::new(config)
        };
        let seeds = engine
            .catalog
            .autostart()
            .map(|template| template.instantiate(&engine.factory))
            .collect::<DesktopResult<Vec<_>>>()?;
        for window in seeds {
            engine.registry.open(window)?;
        }
        info!(event = "desktop.engine.seeded", windows = engine.registry.len());
        Ok(engine)
    }

    /// Default catalog, built-in components, default config
    pub fn standard() -> DesktopResult<Self> {
        Self::with_catalog(
            DesktopConfig::default(),
            WindowCatalog::default(),
            ComponentFactory::with_builtins(),
        )
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }

    /// Read access to the window records
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Read access to the drag state
    pub fn input(&self) -> &PointerController {
        &self.input
    }

    /// Chrome layout in use
    pub fn style(&self) -> &ChromeStyle {
        &self.style
    }
}
