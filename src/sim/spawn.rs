//! Entity spawner
//!
//! Decides when and where new stars enter the field. Spawning is
//! best-effort: at most one star per tick, driven by a time accumulator
//! against the current spawn interval.

use glam::Vec2;
use rand::Rng;

use super::state::{SessionState, Star};
use crate::consts::*;

/// Accumulate elapsed time and spawn at most one star.
///
/// Returns true if a star was spawned this tick; the caller retunes the
/// spawn cadence on that edge. The accumulator resets to zero on spawn,
/// so time past the interval is not carried over.
pub fn advance(state: &mut SessionState, dt_ms: f32) -> bool {
    state.since_spawn_ms += dt_ms;
    if state.since_spawn_ms < state.spawn_interval_ms {
        return false;
    }
    state.since_spawn_ms = 0.0;
    let star = make_star(state);
    state.stars.push(star);
    true
}

/// Roll a new star just above the visible field
fn make_star(state: &mut SessionState) -> Star {
    let radius = state.rng.random_range(STAR_MIN_RADIUS..=STAR_MAX_RADIUS);
    let x = state.rng.random_range(radius..=FIELD_WIDTH - radius);
    let y = SPAWN_BASE_HEIGHT - state.rng.random_range(0.0..SPAWN_HEIGHT_JITTER);
    let fall_speed = state.fall_speed_base + state.rng.random_range(0.0..FALL_SPEED_JITTER);
    Star {
        pos: Vec2::new(x, y),
        radius,
        fall_speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::SessionState;

    fn running_session() -> SessionState {
        let mut state = SessionState::new(12345);
        state.start();
        state
    }

    #[test]
    fn no_spawn_before_interval_elapses() {
        let mut state = running_session();
        let interval = state.spawn_interval_ms;
        assert!(!advance(&mut state, interval - 1.0));
        assert!(state.stars().is_empty());
    }

    #[test]
    fn spawns_exactly_one_star_and_resets_accumulator() {
        let mut state = running_session();
        let interval = state.spawn_interval_ms;
        assert!(advance(&mut state, interval));
        assert_eq!(state.stars().len(), 1);
        assert_eq!(state.since_spawn_ms, 0.0);
    }

    #[test]
    fn at_most_one_spawn_even_for_huge_accumulation() {
        let mut state = running_session();
        let interval = state.spawn_interval_ms;
        assert!(advance(&mut state, interval * 3.0));
        assert_eq!(state.stars().len(), 1);
    }

    #[test]
    fn spawned_stars_are_within_bounds() {
        let mut state = running_session();
        for _ in 0..100 {
            let star = make_star(&mut state);
            assert!(star.radius >= STAR_MIN_RADIUS && star.radius <= STAR_MAX_RADIUS);
            assert!(star.pos.x >= star.radius);
            assert!(star.pos.x <= FIELD_WIDTH - star.radius);
            assert!(star.pos.y <= SPAWN_BASE_HEIGHT);
            assert!(star.pos.y >= SPAWN_BASE_HEIGHT - SPAWN_HEIGHT_JITTER);
            assert!(star.fall_speed >= state.fall_speed_base);
            assert!(star.fall_speed < state.fall_speed_base + FALL_SPEED_JITTER);
        }
    }

    #[test]
    fn same_seed_spawns_identically() {
        let mut a = running_session();
        let mut b = running_session();
        assert_eq!(make_star(&mut a), make_star(&mut b));
    }
}
