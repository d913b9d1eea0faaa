//! Platform adapters
//!
//! Everything between the outside world and the simulation core:
//! - `input`: paddle ownership and clamped movement
//! - `time`: monotonic timestamps to clamped frame deltas

pub mod input;
pub mod time;

pub use input::PaddleInput;
pub use time::FrameClock;
