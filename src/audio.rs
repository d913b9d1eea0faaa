//! Sound cues for session events
//!
//! The director maps simulation events to cues and hands them to a
//! pluggable sink. A missing or failing sink must never affect the tick
//! loop, so every sink error ends at a log line.

use std::error::Error;

use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Session started, begin background music
    MusicStart,
    /// Session ended, stop background music
    MusicStop,
    /// A star landed in the paddle
    Catch,
    /// A star hit the ground
    Miss,
    /// Win fanfare
    Win,
    /// Loss sting
    GameOver,
}

/// Playback backend; implementations may fail freely
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue) -> Result<(), Box<dyn Error>>;
}

/// Maps session events to cues and isolates sink failures
pub struct AudioDirector {
    sink: Option<Box<dyn AudioSink>>,
}

impl AudioDirector {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Director without a backend; all cues are dropped
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Observe a session start
    pub fn on_session_start(&mut self) {
        self.play(SoundCue::MusicStart);
    }

    /// Observe the events of one tick
    pub fn on_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Caught { .. } => self.play(SoundCue::Catch),
                GameEvent::Missed { .. } => self.play(SoundCue::Miss),
                GameEvent::Ended { win } => {
                    self.play(if *win { SoundCue::Win } else { SoundCue::GameOver });
                    self.play(SoundCue::MusicStop);
                }
            }
        }
    }

    fn play(&mut self, cue: SoundCue) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if let Err(err) = sink.play(cue) {
            log::warn!("audio sink failed on {cue:?}: {err}");
        }
    }
}
