//! Built-in window bodies

mod clock;
mod text;
mod visualizer;

pub use clock::Clock;
pub use text::TextDocument;
pub use visualizer::Visualizer;
