//! Frame-driven simulation tick
//!
//! Advances one session by a clamped time delta. Per-tick ordering:
//! difficulty ramp, spawner, gravity integration, catch resolution, then
//! the session state machine.

use super::catch;
use super::ramp;
use super::spawn;
use super::state::{GameEvent, Paddle, SessionState, SessionStatus};
use crate::consts::*;

/// Advance the session by one tick.
///
/// `dt_ms` is sanitized here: non-finite or negative deltas collapse to
/// zero and large pauses are clamped to [`MAX_TICK_MS`]. A tick delivered
/// while the session is not running is a no-op. Catch/miss events for the
/// tick are appended to `events`, newest-spawned star first; the tick that
/// crosses a threshold ends with a terminal [`GameEvent::Ended`].
pub fn tick(state: &mut SessionState, paddle: &Paddle, dt_ms: f32, events: &mut Vec<GameEvent>) {
    if !state.status.is_running() {
        return;
    }

    let dt_ms = clamp_dt(dt_ms);

    ramp::advance(state, dt_ms);

    if spawn::advance(state, dt_ms) {
        ramp::reschedule_spawn(state);
    }

    integrate(state, dt_ms);

    let first_event = events.len();
    catch::resolve(state, paddle, events);
    apply_events(state, events, first_event);
}

/// Clamp a raw frame delta to the valid range
fn clamp_dt(dt_ms: f32) -> f32 {
    if !dt_ms.is_finite() || dt_ms < 0.0 {
        0.0
    } else {
        dt_ms.min(MAX_TICK_MS)
    }
}

/// Gravity integration, normalized to the reference frame duration so the
/// fall feel is independent of the actual tick rate.
fn integrate(state: &mut SessionState, dt_ms: f32) {
    let frames = dt_ms / REFERENCE_FRAME_MS;
    for star in &mut state.stars {
        star.fall_speed += GRAVITY * frames;
        star.pos.y += star.fall_speed * frames * PIXELS_PER_SPEED_UNIT;
    }
}

/// Fold the tick's catch/miss events into the counters.
///
/// Stops at the first threshold crossing: later events of the same tick
/// are dropped, so one tick can never count past GOAL or LIVES and the
/// session leaves Running exactly once.
fn apply_events(state: &mut SessionState, events: &mut Vec<GameEvent>, first_event: usize) {
    let mut end: Option<bool> = None;
    let mut applied = first_event;
    while applied < events.len() {
        match events[applied] {
            GameEvent::Caught { .. } => {
                state.score += 1;
                if state.score >= GOAL {
                    end = Some(true);
                }
            }
            GameEvent::Missed { .. } => {
                state.misses += 1;
                if state.misses >= LIVES {
                    end = Some(false);
                }
            }
            GameEvent::Ended { .. } => {}
        }
        applied += 1;
        if end.is_some() {
            break;
        }
    }
    events.truncate(applied);

    if let Some(win) = end {
        state.status = if win {
            SessionStatus::Won
        } else {
            SessionStatus::Lost
        };
        events.push(GameEvent::Ended { win });
        log::info!(
            "session over: {} (score {}, misses {})",
            if win { "win" } else { "loss" },
            state.score,
            state.misses
        );
    }
}
