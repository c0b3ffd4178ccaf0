//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or filled with a color.
//! Uses a flat array of independently-owned Copy cells, so writing one cell
//! can never alias another.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom).

use crate::core::pieces::Shape;
use crate::types::{Cell, ColorTag, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Collision predicate for a shape placed with its top-left at (x, y).
    ///
    /// An occupied relative cell collides when its absolute column leaves
    /// `[0, WIDTH)`, its absolute row reaches `HEIGHT`, or it lands on a
    /// filled cell. Rows above the board (negative y) are bounds-checked
    /// but exempt from the filled check, so a piece may overhang the top
    /// edge while spawning.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.cells().any(|(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return true;
            }
            py >= 0 && self.is_filled(px, py)
        })
    }

    /// Merge a shape into the board at (x, y) with the given color.
    ///
    /// Cells on negative rows are skipped (still above the visible board);
    /// all writes are bounds-checked so a partially out-of-range shape can
    /// never corrupt the grid.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8, color: ColorTag) {
        for (dx, dy) in shape.cells() {
            let py = y + dy;
            if py < 0 {
                continue;
            }
            self.set(x + dx, py, Some(color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, keeping the surviving rows in their original
    /// relative order and prepending the same number of empty rows at the
    /// top. Returns the number of rows cleared.
    ///
    /// Uses a bottom-up two-pointer compaction with `copy_within`, so the
    /// board height is preserved without reallocating.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Fresh empty rows at the top replace whatever was compacted away.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
