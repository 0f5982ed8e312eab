//! Scoring module - line-clear points, level and gravity speed
//!
//! Level and drop delay are pure functions of the score, so they never need
//! to be stored separately from it.

use crate::types::{
    BASE_DROP_DELAY_MS, DROP_DELAY_STEP_MS, LINE_SCORES, MIN_DROP_DELAY_MS, SCORE_PER_LEVEL,
};

/// Points for clearing `lines` rows at once. More than four pays like four.
pub fn line_clear_points(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// 1-based level for a score
pub fn level_for_score(score: u32) -> u32 {
    score / SCORE_PER_LEVEL + 1
}

/// Gravity interval for `level`, with the standard base delay
pub fn drop_delay_ms(level: u32) -> u32 {
    drop_delay_from(BASE_DROP_DELAY_MS, level)
}

/// Gravity interval for `level` starting from `base_ms` at level 1.
///
/// Each level shaves a fixed step off, never going below the floor.
pub fn drop_delay_from(base_ms: u32, level: u32) -> u32 {
    let shaved = level.saturating_sub(1).saturating_mul(DROP_DELAY_STEP_MS);
    base_ms.saturating_sub(shaved).max(MIN_DROP_DELAY_MS)
}
