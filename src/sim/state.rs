//! Session state and core simulation types
//!
//! One `SessionState` is one play-through. There are no process-wide
//! singletons; callers own the session and pass it to `tick` by reference.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Before the first start; nothing ticks
    Idle,
    /// Active gameplay, accepting ticks
    Running,
    /// Terminal: the catch goal was reached
    Won,
    /// Terminal: the miss limit was reached
    Lost,
}

impl SessionStatus {
    pub fn is_running(self) -> bool {
        self == SessionStatus::Running
    }

    /// Won or Lost; a fresh `start()` is the only way out
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Won | SessionStatus::Lost)
    }
}

/// A falling star entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Position in field pixels, y grows downward
    pub pos: Vec2,
    pub radius: f32,
    /// Normalized vertical speed; the integrator scales it to pixels
    pub fall_speed: f32,
}

impl Star {
    /// Lowest point of the star, the edge that reaches paddle and ground first
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The player's catch paddle
///
/// Owned by the input adapter, read-only to the simulation. The adapter
/// keeps `x` clamped so the paddle never leaves the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Horizontal center position
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Movement speed bound for keyboard steps
    pub speed: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: FIELD_WIDTH / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }
}

impl Paddle {
    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Resting line of the paddle body, floating just above the ground
    pub fn base_y(&self) -> f32 {
        GROUND_Y - PADDLE_LIFT
    }

    /// Top edge of the catch region
    pub fn top(&self) -> f32 {
        self.base_y() - self.height
    }

    /// Smallest legal center position
    pub fn min_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Largest legal center position
    pub fn max_x(&self) -> f32 {
        FIELD_WIDTH - self.width / 2.0
    }
}

/// Events produced by one tick, newest-spawned star first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A star intersected the paddle's catch region
    Caught { x: f32, radius: f32 },
    /// A star crossed the ground line
    Missed { x: f32 },
    /// The session reached a terminal state this tick
    Ended { win: bool },
}

/// Complete session state
///
/// Counters and status are read through accessors; the state machine in
/// `tick` is the only writer once a session is running.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Run seed for reproducibility within the session
    pub seed: u64,
    pub(crate) status: SessionStatus,
    pub(crate) score: u32,
    pub(crate) misses: u32,
    /// Live stars, oldest spawn first
    pub stars: Vec<Star>,
    /// Current ms between spawns, retuned at each spawn
    pub spawn_interval_ms: f32,
    /// Ramped base vertical speed given to new stars
    pub fall_speed_base: f32,
    /// Time accumulated toward the next spawn
    pub since_spawn_ms: f32,
    pub(crate) rng: Pcg32,
}

impl SessionState {
    /// Create a session in the idle state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            status: SessionStatus::Idle,
            score: 0,
            misses: 0,
            stars: Vec::new(),
            spawn_interval_ms: SPAWN_BASE_INTERVAL_MS,
            fall_speed_base: FALL_SPEED_BASE,
            since_spawn_ms: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start (or restart) a play-through
    ///
    /// Resets counters, live stars and ramp values to their initial
    /// constants. Valid from any state, including Won/Lost.
    pub fn start(&mut self) {
        self.status = SessionStatus::Running;
        self.score = 0;
        self.misses = 0;
        self.stars.clear();
        self.spawn_interval_ms = SPAWN_BASE_INTERVAL_MS;
        self.fall_speed_base = FALL_SPEED_BASE;
        self.since_spawn_ms = 0.0;
        log::info!("session start (seed {})", self.seed);
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Snapshot of the run for logs and tooling
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.seed,
            status: self.status,
            score: self.score,
            misses: self.misses,
        }
    }
}

/// Serializable end-of-run summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub status: SessionStatus,
    pub score: u32,
    pub misses: u32,
}
