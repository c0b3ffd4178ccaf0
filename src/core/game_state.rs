//! Game state module - manages the complete game state
//!
//! Ties the core components together: board, piece catalog, piece source,
//! and scoring. Every transition is synchronous and all-or-nothing: a
//! command either commits or leaves the state untouched. The engine has no
//! internal timers; an external driver calls `tick()` at the cadence
//! reported by `drop_interval_ms()`.

use crate::core::pieces::{definition, Shape};
use crate::core::rng::{PieceSource, UniformPieceSource};
use crate::core::scoring::{drop_interval_for_level, level_for_score, score_for_clear};
use crate::core::Board;
use crate::types::{ColorTag, Command, Phase, PieceKind, BASE_DROP_MS, SPAWN_X, SPAWN_Y};

/// Active falling piece, anchored by the top-left of its shape matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub shape: Shape,
    pub color: ColorTag,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Instantiate a catalog piece at the spawn offset
    fn spawn(kind: PieceKind) -> Self {
        let def = definition(kind);
        Self {
            shape: def.base_shape(),
            color: def.color,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Iterate the absolute board cells this piece occupies
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Complete game state
pub struct GameState {
    board: Board,
    /// None only while the session is over.
    active: Option<ActivePiece>,
    score: u32,
    level: u32,
    drop_interval_ms: u32,
    phase: Phase,
    source: Box<dyn PieceSource>,
}

impl GameState {
    /// Create a new game with uniform random piece selection
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(UniformPieceSource::new(seed)))
    }

    /// Create a new game drawing pieces from the given source
    pub fn with_source(source: Box<dyn PieceSource>) -> Self {
        let mut state = Self {
            board: Board::new(),
            active: None,
            score: 0,
            level: 1,
            drop_interval_ms: BASE_DROP_MS,
            phase: Phase::Playing,
            source,
        };
        state.spawn();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access. Setup hook for tests and tools; gameplay
    /// mutation goes through commands and `tick()`.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity cadence. Drivers re-read this after every tick and
    /// re-arm their timer with it.
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Apply a player command. Returns whether the command was accepted.
    /// Every command is a no-op once the session is over.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        match command {
            Command::MoveLeft => self.try_shift(-1),
            Command::MoveRight => self.try_shift(1),
            Command::SoftDrop => self.fall_one(),
            Command::HardDrop => {
                self.hard_drop();
                true
            }
            Command::Rotate => self.try_rotate(),
        }
    }

    /// Gravity entry point: one fall attempt. A blocked fall runs the full
    /// lock / line-clear / score / spawn cascade. Returns whether the piece
    /// actually fell a row.
    pub fn tick(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.fall_one()
    }

    /// Restart the session: empty board, zeroed score, base cadence, fresh
    /// piece. Meaningful after game over, but legal at any time.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.drop_interval_ms = BASE_DROP_MS;
        self.phase = Phase::Playing;
        self.spawn();
    }

    /// Attempt a horizontal move, committing only if collision-free
    fn try_shift(&mut self, dx: i8) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if self.board.collides(&active.shape, active.x + dx, active.y) {
            return false;
        }
        active.x += dx;
        true
    }

    /// Attempt a clockwise rotation in place. No kick search: a rotation
    /// that collides at the unchanged (x, y) is rejected entirely.
    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let rotated = active.shape.rotated_cw();
        if self.board.collides(&rotated, active.x, active.y) {
            return false;
        }
        active.shape = rotated;
        true
    }

    /// One-row fall attempt shared by the gravity tick and soft drop.
    /// Returns true if the piece fell; a blocked fall locks instead.
    fn fall_one(&mut self) -> bool {
        let blocked = match self.active.as_ref() {
            Some(active) => self.board.collides(&active.shape, active.x, active.y + 1),
            None => return false,
        };
        if blocked {
            self.lock_and_continue();
            return false;
        }
        if let Some(active) = self.active.as_mut() {
            active.y += 1;
        }
        true
    }

    /// Drop straight to the last collision-free row, then lock immediately
    fn hard_drop(&mut self) {
        {
            let Some(active) = self.active.as_mut() else {
                return;
            };
            while !self.board.collides(&active.shape, active.x, active.y + 1) {
                active.y += 1;
            }
        }
        self.lock_and_continue();
    }

    /// Lock cascade: merge the active piece into the board, clear full
    /// rows, update score/level/cadence, then spawn the next piece.
    fn lock_and_continue(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.board
            .merge(&active.shape, active.x, active.y, active.color);

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.score += score_for_clear(cleared);
            let level = level_for_score(self.score);
            if level != self.level {
                self.level = level;
                self.drop_interval_ms = drop_interval_for_level(level);
            }
        }

        self.spawn();
    }

    /// Draw the next piece from the source. A spawn that collides ends the
    /// session without touching the board, score, or level.
    fn spawn(&mut self) {
        let piece = ActivePiece::spawn(self.source.next_kind());
        if self.board.collides(&piece.shape, piece.x, piece.y) {
            self.phase = Phase::GameOver;
            return;
        }
        self.active = Some(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedPieceSource;
    use crate::types::BOARD_WIDTH;

    fn scripted(kinds: Vec<PieceKind>) -> GameState {
        GameState::with_source(Box::new(ScriptedPieceSource::new(kinds)))
    }

    fn fill_row(state: &mut GameState, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            state.board.set(x, y, Some(ColorTag::Cyan));
        }
    }

    #[test]
    fn new_game_spawns_at_offset() {
        let state = scripted(vec![PieceKind::T]);
        let active = state.active().unwrap();
        assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.drop_interval_ms(), BASE_DROP_MS);
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn moves_commit_when_free() {
        let mut state = scripted(vec![PieceKind::O]);
        assert!(state.apply(Command::MoveRight));
        assert_eq!(state.active().unwrap().x, SPAWN_X + 1);
        assert!(state.apply(Command::MoveLeft));
        assert_eq!(state.active().unwrap().x, SPAWN_X);
    }

    #[test]
    fn move_rejected_at_wall_leaves_state_unchanged() {
        let mut state = scripted(vec![PieceKind::O]);
        // O is 2 wide; from x=3 it can shift left 3 times.
        for _ in 0..3 {
            assert!(state.apply(Command::MoveLeft));
        }
        assert!(!state.apply(Command::MoveLeft));
        assert_eq!(state.active().unwrap().x, 0);
    }

    #[test]
    fn soft_drop_moves_one_row() {
        let mut state = scripted(vec![PieceKind::I]);
        assert!(state.apply(Command::SoftDrop));
        assert_eq!(state.active().unwrap().y, 1);
    }

    #[test]
    fn blocked_soft_drop_locks_and_respawns() {
        let mut state = scripted(vec![PieceKind::I]);
        // I is one row tall: 19 drops reach the floor.
        for _ in 0..19 {
            assert!(state.apply(Command::SoftDrop));
        }
        assert_eq!(state.active().unwrap().y, 19);

        // The 20th attempt is blocked: the piece locks, the next spawns.
        assert!(!state.apply(Command::SoftDrop));
        assert!(state.board().is_filled(3, 19));
        let active = state.active().unwrap();
        assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
    }

    #[test]
    fn hard_drop_locks_at_bottom() {
        let mut state = scripted(vec![PieceKind::O]);
        assert!(state.apply(Command::HardDrop));
        for x in 3..=4 {
            assert!(state.board().is_filled(x, 18));
            assert!(state.board().is_filled(x, 19));
        }
        // A new piece is already active at spawn.
        assert_eq!(state.active().unwrap().y, SPAWN_Y);
    }

    #[test]
    fn rotate_commits_in_open_space() {
        let mut state = scripted(vec![PieceKind::I]);
        assert!(state.apply(Command::Rotate));
        let active = state.active().unwrap();
        assert_eq!((active.shape.width(), active.shape.height()), (1, 4));
    }

    #[test]
    fn rotate_rejected_against_floor() {
        let mut state = scripted(vec![PieceKind::I]);
        for _ in 0..19 {
            state.apply(Command::SoftDrop);
        }
        // Horizontal I on the floor: the vertical form would extend below.
        assert!(!state.apply(Command::Rotate));
        let active = state.active().unwrap();
        assert_eq!((active.shape.width(), active.shape.height()), (4, 1));
    }

    #[test]
    fn clearing_a_row_scores_flat_points() {
        let mut state = scripted(vec![PieceKind::O]);
        // Full row 19 except the two columns the O will fill.
        for x in 0..BOARD_WIDTH as i8 {
            if x != 3 && x != 4 {
                state.board.set(x, 19, Some(ColorTag::Green));
            }
        }
        state.apply(Command::HardDrop);

        assert_eq!(state.score(), 100);
        assert_eq!(state.level(), 1);
        // The O's top half survives, shifted down one row.
        assert!(state.board.is_filled(3, 19));
        assert!(state.board.is_filled(4, 19));
        assert!(!state.board.is_row_full(19));
    }

    #[test]
    fn level_and_cadence_follow_score() {
        let mut state = scripted(vec![PieceKind::O]);
        state.score = 950;

        fill_row(&mut state, 19);
        // Lock the O against the filled floor row.
        state.apply(Command::HardDrop);

        assert_eq!(state.score(), 1050);
        assert_eq!(state.level(), 2);
        assert_eq!(state.drop_interval_ms(), 450);

        // Another single keeps level 2 and its cadence.
        fill_row(&mut state, 19);
        state.apply(Command::HardDrop);
        assert_eq!(state.score(), 1150);
        assert_eq!(state.level(), 2);
        assert_eq!(state.drop_interval_ms(), 450);
    }

    #[test]
    fn blocked_spawn_ends_session() {
        let mut state = scripted(vec![PieceKind::O]);
        // Move the live piece off the spawn area first.
        for _ in 0..4 {
            state.apply(Command::SoftDrop);
        }
        state.board.set(3, 0, Some(ColorTag::Red));

        let score_before = state.score();
        let level_before = state.level();
        state.apply(Command::HardDrop);

        assert_eq!(state.phase(), Phase::GameOver);
        assert!(state.active().is_none());
        assert_eq!(state.score(), score_before);
        assert_eq!(state.level(), level_before);
        // The seeded cell is untouched.
        assert!(state.board().is_filled(3, 0));
    }

    #[test]
    fn commands_are_noops_after_game_over() {
        let mut state = scripted(vec![PieceKind::O]);
        state.phase = Phase::GameOver;
        state.active = None;

        for command in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SoftDrop,
            Command::HardDrop,
            Command::Rotate,
        ] {
            assert!(!state.apply(command));
        }
        assert!(!state.tick());
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut state = scripted(vec![PieceKind::O]);
        state.score = 2300;
        state.level = 3;
        state.drop_interval_ms = 400;
        fill_row(&mut state, 10);
        state.phase = Phase::GameOver;
        state.active = None;

        state.reset();

        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.drop_interval_ms(), BASE_DROP_MS);
        assert!(state.board().cells().iter().all(|cell| cell.is_none()));
        let active = state.active().unwrap();
        assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
    }

    #[test]
    fn tick_is_a_fall_attempt() {
        let mut state = scripted(vec![PieceKind::T]);
        assert!(state.tick());
        assert_eq!(state.active().unwrap().y, 1);
    }

    #[test]
    fn tick_locks_when_grounded() {
        let mut state = scripted(vec![PieceKind::O]);
        for _ in 0..18 {
            assert!(state.tick());
        }
        // Grounded now: the next tick locks and respawns.
        assert!(!state.tick());
        assert!(state.board().is_filled(3, 19));
        assert_eq!(state.active().unwrap().y, SPAWN_Y);
    }
}
