//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - Clamped tick deltas only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod catch;
pub mod ramp;
pub mod spawn;
pub mod state;
pub mod tick;

pub use catch::{Outcome, classify};
pub use state::{GameEvent, Paddle, SessionState, SessionStatus, SessionSummary, Star};
pub use tick::tick;
