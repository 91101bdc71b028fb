//! Terminal falling-block puzzle game.
//!
//! The `core` module is the board simulation: grid, collision, rotation,
//! line clears, and level progression. The `term` and `input` modules are
//! the terminal host's collaborators (rendering and key mapping); the
//! binary wires them to a clock.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
