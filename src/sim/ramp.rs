//! Difficulty ramp
//!
//! Fall speed grows with elapsed session time; spawn cadence tightens with
//! score. Both trend harder, neither goes degenerate.

use rand::Rng;

use super::state::SessionState;
use crate::consts::*;

/// Grow the base fall speed with elapsed tick time. Never decreases.
pub fn advance(state: &mut SessionState, dt_ms: f32) {
    state.fall_speed_base += FALL_SPEED_RAMP_PER_MS * dt_ms;
}

/// Retune the spawn interval after a spawn event.
///
/// Interval = base - random jitter - capped score cut, floored so the
/// cadence stays at a sane positive minimum.
pub fn reschedule_spawn(state: &mut SessionState) {
    let jitter = state.rng.random_range(0.0..SPAWN_INTERVAL_JITTER_MS);
    let score_cut = (state.score as f32 * SCORE_CUT_PER_POINT_MS).min(SCORE_CUT_CAP_MS);
    state.spawn_interval_ms =
        (SPAWN_BASE_INTERVAL_MS - jitter - score_cut).max(MIN_SPAWN_INTERVAL_MS);
}
