//! Core module - pure game rules with no external dependencies
//!
//! Everything here is synchronous state-transition logic: no I/O, no
//! timers, no terminal. The driving collaborators live in `main`,
//! `input`, and `term`.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{ActivePiece, GameState};
pub use pieces::{definition, Shape, Tetromino, CATALOG};
pub use rng::{PieceSource, ScriptedPieceSource, SimpleRng, UniformPieceSource};
