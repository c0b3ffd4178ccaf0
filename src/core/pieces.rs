//! Pieces module - the tetromino catalog and shape matrices
//!
//! Shapes are boolean occupancy matrices rather than fixed mino-offset
//! tables: rotation is matrix transpose plus row reversal, so rectangular
//! shapes swap their dimensions when rotated. There is no kick search;
//! a rotation that collides is rejected as-is.

use crate::types::{ColorTag, PieceKind};

/// Occupancy matrix for a piece in its current orientation, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<Vec<bool>>,
}

impl Shape {
    fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// Width of the bounding box
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Height of the bounding box
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the relative cell (dx, dy) is occupied
    pub fn filled(&self, dx: usize, dy: usize) -> bool {
        self.rows
            .get(dy)
            .and_then(|row| row.get(dx))
            .copied()
            .unwrap_or(false)
    }

    /// Iterate the occupied relative cells as (dx, dy) offsets
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &filled)| filled)
                .map(move |(dx, _)| (dx as i8, dy as i8))
        })
    }

    /// 90-degree clockwise rotation: transpose, then reverse each row.
    /// A WxH matrix becomes HxW.
    pub fn rotated_cw(&self) -> Shape {
        let h = self.height();
        let w = self.width();
        let rows = (0..w)
            .map(|x| (0..h).map(|y| self.rows[h - 1 - y][x]).collect())
            .collect();
        Shape { rows }
    }
}

/// Immutable catalog entry: base matrix plus the color its cells take
#[derive(Debug, Clone, Copy)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub color: ColorTag,
    base: &'static [&'static [u8]],
}

impl Tetromino {
    /// Materialize the base (spawn orientation) shape
    pub fn base_shape(&self) -> Shape {
        Shape::from_rows(
            self.base
                .iter()
                .map(|row| row.iter().map(|&cell| cell != 0).collect())
                .collect(),
        )
    }
}

/// The seven tetromino definitions, in `PieceKind::ALL` order
pub const CATALOG: [Tetromino; 7] = [
    Tetromino {
        kind: PieceKind::I,
        color: ColorTag::Cyan,
        base: &[&[1, 1, 1, 1]],
    },
    Tetromino {
        kind: PieceKind::O,
        color: ColorTag::Yellow,
        base: &[&[1, 1], &[1, 1]],
    },
    Tetromino {
        kind: PieceKind::T,
        color: ColorTag::Purple,
        base: &[&[0, 1, 0], &[1, 1, 1]],
    },
    Tetromino {
        kind: PieceKind::S,
        color: ColorTag::Green,
        base: &[&[0, 1, 1], &[1, 1, 0]],
    },
    Tetromino {
        kind: PieceKind::Z,
        color: ColorTag::Red,
        base: &[&[1, 1, 0], &[0, 1, 1]],
    },
    Tetromino {
        kind: PieceKind::J,
        color: ColorTag::Blue,
        base: &[&[1, 0, 0], &[1, 1, 1]],
    },
    Tetromino {
        kind: PieceKind::L,
        color: ColorTag::Orange,
        base: &[&[0, 0, 1], &[1, 1, 1]],
    },
];

/// Look up the catalog entry for a piece kind
pub fn definition(kind: PieceKind) -> &'static Tetromino {
    &CATALOG[kind as usize]
}
