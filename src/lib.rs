//! Starfall - a catch-the-falling-stars arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, gravity, catch resolution, session state)
//! - `platform`: Input and frame-clock adapters around the simulation
//! - `audio`: Event-driven sound cues, isolated from the tick loop
//! - `hud`: Read-only render and HUD snapshots

pub mod audio;
pub mod hud;
pub mod platform;
pub mod sim;

pub use sim::{GameEvent, Paddle, SessionState, SessionStatus, Star};

/// Game configuration constants
pub mod consts {
    /// Play-field dimensions in pixels
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;
    /// Ground line; a star crossing it counts as a miss
    pub const GROUND_Y: f32 = FIELD_HEIGHT - 60.0;

    /// Catches needed to win (beatable)
    pub const GOAL: u32 = 30;
    /// Allowed misses before the session is lost
    pub const LIVES: u32 = 6;

    /// Base ms between spawns (randomized slightly at each spawn)
    pub const SPAWN_BASE_INTERVAL_MS: f32 = 900.0;
    /// Random reduction drawn at each spawn
    pub const SPAWN_INTERVAL_JITTER_MS: f32 = 300.0;
    /// Interval reduction per point of score
    pub const SCORE_CUT_PER_POINT_MS: f32 = 8.0;
    /// Cap on the score-based reduction
    pub const SCORE_CUT_CAP_MS: f32 = 350.0;
    /// Hard floor for the spawn interval
    pub const MIN_SPAWN_INTERVAL_MS: f32 = 250.0;

    /// Star radius range
    pub const STAR_MIN_RADIUS: f32 = 6.0;
    pub const STAR_MAX_RADIUS: f32 = 14.0;

    /// Downward acceleration per reference frame
    pub const GRAVITY: f32 = 0.02;
    /// Initial vertical speed at session start
    pub const FALL_SPEED_BASE: f32 = 0.6;
    /// Random extra speed given to each spawned star
    pub const FALL_SPEED_JITTER: f32 = 0.6;
    /// Fall-speed growth per elapsed millisecond (mild difficulty ramp)
    pub const FALL_SPEED_RAMP_PER_MS: f32 = 0.000_25;

    /// Stars enter above the visible field so they drop in smoothly
    pub const SPAWN_BASE_HEIGHT: f32 = -20.0;
    pub const SPAWN_HEIGHT_JITTER: f32 = 60.0;

    /// Reference frame duration used to normalize variable tick rates
    pub const REFERENCE_FRAME_MS: f32 = 16.0;
    /// Converts normalized fall speed into field pixels per reference frame
    pub const PIXELS_PER_SPEED_UNIT: f32 = 6.0;
    /// Upper bound on a single tick delta (prevents tunneling after pauses)
    pub const MAX_TICK_MS: f32 = 40.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Reference frames covered by one keyboard step
    pub const KEY_STEP_FRAMES: f32 = 6.0;
    /// Gap between the paddle's resting line and the ground
    pub const PADDLE_LIFT: f32 = 6.0;
}
