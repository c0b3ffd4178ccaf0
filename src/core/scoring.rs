//! Scoring module - score, level, and gravity cadence derivations
//!
//! Flat per-row scoring with no multi-line bonus: four rows cleared at
//! once are worth exactly four singles. Level and drop interval are pure
//! functions of the score, recomputed after every clear.

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, LEVEL_SCORE_STEP, MIN_DROP_MS, POINTS_PER_ROW};

/// Points awarded for clearing `rows` rows in one lock
pub fn score_for_clear(rows: usize) -> u32 {
    rows as u32 * POINTS_PER_ROW
}

/// Level derived from score: one level per 1000 points, starting at 1
pub fn level_for_score(score: u32) -> u32 {
    score / LEVEL_SCORE_STEP + 1
}

/// Gravity interval for a level: 50ms faster per level, floored at 100ms
pub fn drop_interval_for_level(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(MIN_DROP_MS)
}
