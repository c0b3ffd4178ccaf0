//! Terminal presentation layer.
//!
//! Read-only with respect to the engine: it composites the merged view of
//! board + active piece and writes it to the terminal.

pub mod game_view;
pub mod renderer;

pub use game_view::{merged_grid, status_lines};
pub use renderer::TerminalRenderer;
