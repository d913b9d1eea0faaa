//! Paddle input adapter
//!
//! Owns the paddle singleton. The core reads the paddle but never writes
//! it; every setter here clamps to the field bounds, so the paddle
//! invariant holds no matter what the device reports.

use crate::consts::KEY_STEP_FRAMES;
use crate::sim::Paddle;

/// Owns the paddle and applies clamped movement from input devices
#[derive(Debug)]
pub struct PaddleInput {
    paddle: Paddle,
}

impl Default for PaddleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl PaddleInput {
    pub fn new() -> Self {
        Self {
            paddle: Paddle::default(),
        }
    }

    /// Read-only view for the core and renderers
    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    /// One keyboard step to the left
    pub fn nudge_left(&mut self) {
        self.set_x(self.paddle.x - self.paddle.speed * KEY_STEP_FRAMES);
    }

    /// One keyboard step to the right
    pub fn nudge_right(&mut self) {
        self.set_x(self.paddle.x + self.paddle.speed * KEY_STEP_FRAMES);
    }

    /// Absolute position from a pointer or touch event
    pub fn set_x(&mut self, x: f32) {
        // A NaN from a device would poison the clamp
        if !x.is_finite() {
            return;
        }
        self.paddle.x = x.clamp(self.paddle.min_x(), self.paddle.max_x());
    }
}
