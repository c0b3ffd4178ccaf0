//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Top-left offset at which every new piece enters the board
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = 0;

/// Scoring: flat points per cleared row, no multi-line bonus
pub const POINTS_PER_ROW: u32 = 100;
/// One level gained per this many points
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// Gravity cadence (milliseconds): starts at the base interval and
/// shortens per level down to the floor
pub const BASE_DROP_MS: u32 = 500;
pub const DROP_STEP_MS: u32 = 50;
pub const MIN_DROP_MS: u32 = 100;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Color tag carried by filled cells; one per tetromino kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

/// Cell on the board (None = empty, Some = filled with a color)
pub type Cell = Option<ColorTag>;

/// Discrete player commands accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
}

/// Session phase. The only transitions are a blocked spawn
/// (`Playing -> GameOver`) and an explicit reset (`GameOver -> Playing`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}
