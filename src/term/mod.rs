//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the game state is projected into
//! a simple framebuffer which is then flushed to a terminal backend. No
//! widget/layout library; the board wants precise cell sizing.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
