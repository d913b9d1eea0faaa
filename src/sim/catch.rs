//! Catch and miss resolution
//!
//! Classification is a pure function over a single star; the resolve pass
//! rebuilds the live collection afterwards, so removal can never skip or
//! double-visit an entry.

use super::state::{GameEvent, Paddle, SessionState, Star};
use crate::consts::GROUND_Y;

/// Outcome of one star for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Still live, carried into the next tick
    Falling,
    /// Intersected the paddle's catch region
    Caught,
    /// Crossed the ground line
    Missed,
}

/// Classify a single star against the paddle and the ground line.
///
/// The ground check is authoritative: a star past the ground counts as a
/// miss even if it also overlaps the catch region.
pub fn classify(star: &Star, paddle: &Paddle) -> Outcome {
    if star.pos.y - star.radius > GROUND_Y {
        return Outcome::Missed;
    }
    if star.bottom() >= paddle.top() && star.pos.x >= paddle.left() && star.pos.x <= paddle.right()
    {
        return Outcome::Caught;
    }
    Outcome::Falling
}

/// Classify every live star exactly once, emit catch/miss events
/// newest-spawned first, and retain the still-falling stars in spawn order.
pub fn resolve(state: &mut SessionState, paddle: &Paddle, events: &mut Vec<GameEvent>) {
    let outcomes: Vec<Outcome> = state
        .stars
        .iter()
        .map(|star| classify(star, paddle))
        .collect();

    for (star, outcome) in state.stars.iter().zip(&outcomes).rev() {
        match outcome {
            Outcome::Caught => events.push(GameEvent::Caught {
                x: star.pos.x,
                radius: star.radius,
            }),
            Outcome::Missed => events.push(GameEvent::Missed { x: star.pos.x }),
            Outcome::Falling => {}
        }
    }

    // retain visits in order, in lockstep with the outcomes
    let mut remaining = outcomes.iter();
    state
        .stars
        .retain(|_| matches!(remaining.next(), Some(Outcome::Falling)));
}
