//! Terminal rendering module.
//!
//! Renders into a simple framebuffer that is flushed to a crossterm
//! backend. `GameView` stays pure so frame contents can be unit-tested;
//! only `TerminalRenderer` touches the real terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
