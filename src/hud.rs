//! HUD and render snapshots
//!
//! Renderers consume a read-only view of the session each tick and feed
//! nothing back into the core.

use serde::Serialize;

use crate::consts::{GOAL, LIVES};
use crate::sim::{Paddle, SessionState, SessionStatus, Star};

/// Borrowed per-frame view for a renderer
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub stars: &'a [Star],
    pub paddle: &'a Paddle,
    pub score: u32,
    pub misses: u32,
    pub running: bool,
}

impl<'a> Frame<'a> {
    pub fn capture(session: &'a SessionState, paddle: &'a Paddle) -> Self {
        Self {
            stars: session.stars(),
            paddle,
            score: session.score(),
            misses: session.misses(),
            running: session.status().is_running(),
        }
    }
}

/// Owned HUD counters and message strings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudModel {
    pub score: u32,
    pub goal: u32,
    pub misses: u32,
    pub lives: u32,
    pub message: &'static str,
}

impl HudModel {
    pub fn from_session(session: &SessionState) -> Self {
        Self {
            score: session.score(),
            goal: GOAL,
            misses: session.misses(),
            lives: LIVES,
            message: status_message(session.status()),
        }
    }

    /// Single-line HUD text, as drawn over the field
    pub fn status_line(&self) -> String {
        format!(
            "Score: {}   Goal: {}   Misses: {}/{}",
            self.score, self.goal, self.misses, self.lives
        )
    }
}

/// End-of-session message; empty while idle or running
pub fn status_message(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Won => "You Win! Great catching.",
        SessionStatus::Lost => "Game Over - too many misses.",
        SessionStatus::Idle | SessionStatus::Running => "",
    }
}
