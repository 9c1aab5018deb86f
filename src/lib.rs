//! Terminal 2048.
//!
//! The `core` module is the pure game: board, tiles, the slide/merge engine,
//! and the {Start, Running, Won, Over} lifecycle. `term` projects that state
//! into a framebuffer and flushes it through crossterm; `input` maps key
//! events to game actions.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
