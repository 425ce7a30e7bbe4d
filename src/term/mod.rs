//! Terminal layer: pure view rendering plus the crossterm-backed renderer.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::{Frame, GameView, Glyph, Tone};
