//! blockfall: a falling-block puzzle with a pure game-state core.
//!
//! The `core` module is the engine proper; `input` and `term` are the
//! keyboard and presentation collaborators used by the default binary.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
