//! Game view - composites engine state into displayable form
//!
//! Pure functions over `GameState` so the composition is unit-testable
//! without a terminal.

use crate::core::GameState;
use crate::types::{Cell, Phase, BOARD_HEIGHT, BOARD_WIDTH};

/// Merged view of the board with the active piece painted on top.
/// Row-major, exactly BOARD_HEIGHT rows of BOARD_WIDTH cells.
pub fn merged_grid(state: &GameState) -> Vec<Vec<Cell>> {
    let width = BOARD_WIDTH as usize;
    let mut grid: Vec<Vec<Cell>> = state
        .board()
        .cells()
        .chunks(width)
        .map(|row| row.to_vec())
        .collect();

    if let Some(active) = state.active() {
        for (x, y) in active.cells() {
            if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                grid[y as usize][x as usize] = Some(active.color);
            }
        }
    }

    grid
}

/// Sidebar text: score, level, and phase-dependent hints
pub fn status_lines(state: &GameState) -> Vec<String> {
    let mut lines = vec![
        format!("score  {}", state.score()),
        format!("level  {}", state.level()),
        format!("speed  {}ms", state.drop_interval_ms()),
        String::new(),
    ];
    match state.phase() {
        Phase::Playing => {
            lines.push("arrows move / rotate".to_string());
            lines.push("space  hard drop".to_string());
            lines.push("q      quit".to_string());
        }
        Phase::GameOver => {
            lines.push("GAME OVER".to_string());
            lines.push("r      restart".to_string());
            lines.push("q      quit".to_string());
        }
    }
    lines
}
