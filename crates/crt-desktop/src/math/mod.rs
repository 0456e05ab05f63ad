//! Core geometry types for the desktop canvas
//!
//! All coordinates are canvas pixels with the origin at the top-left
//! corner and `y` growing downwards.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::ChromeStyle;
pub use vec2::Vec2;
