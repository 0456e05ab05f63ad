//! Window and icon catalogs
//!
//! Static data that seeds the registry at startup and lets the launcher
//! open windows on demand.

mod factory;
mod icons;
mod templates;

pub use factory::ComponentFactory;
pub use icons::{default_icons, IconInfo};
pub use templates::{default_templates, WindowCatalog, WindowTemplate};
