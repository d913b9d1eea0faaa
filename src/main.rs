//! Starfall entry point
//!
//! Headless demo loop: a small autopilot tracks the most dangerous star so
//! a full session plays out without a display. Run with RUST_LOG=info to
//! watch the HUD; pass a numeric argument to fix the seed.

use starfall::audio::{AudioDirector, AudioSink, SoundCue};
use starfall::consts::{FIELD_WIDTH, KEY_STEP_FRAMES};
use starfall::hud::HudModel;
use starfall::platform::{FrameClock, PaddleInput};
use starfall::sim::{GameEvent, SessionState, tick};

/// Stands in for a real playback backend
struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, cue: SoundCue) -> Result<(), Box<dyn std::error::Error>> {
        log::debug!("audio cue: {cue:?}");
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(seed_from_clock);
    log::info!("Starfall (native) starting, seed {seed}");

    let mut session = SessionState::new(seed);
    let mut input = PaddleInput::new();
    let mut clock = FrameClock::new();
    let mut audio = AudioDirector::new(Box::new(LogSink));
    let mut events: Vec<GameEvent> = Vec::new();

    session.start();
    audio.on_session_start();

    const FRAME_MS: f64 = 16.0;
    let mut now_ms = 0.0;
    let mut frame: u64 = 0;
    while session.status().is_running() {
        now_ms += FRAME_MS;
        let dt = clock.delta_ms(now_ms);

        steer(&mut input, &session);

        events.clear();
        tick(&mut session, input.paddle(), dt, &mut events);
        audio.on_events(&events);

        frame += 1;
        if frame % 60 == 0 {
            log::info!("{}", HudModel::from_session(&session).status_line());
        }
    }

    let hud = HudModel::from_session(&session);
    log::info!("{}", hud.message);
    match serde_json::to_string_pretty(&session.summary()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::warn!("summary serialization failed: {err}"),
    }
}

/// Chase the star closest to the ground; idle at center when none is live
fn steer(input: &mut PaddleInput, session: &SessionState) {
    let target = session
        .stars()
        .iter()
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|star| star.pos.x)
        .unwrap_or(FIELD_WIDTH / 2.0);

    let step = input.paddle().speed * KEY_STEP_FRAMES;
    if target < input.paddle().x - step {
        input.nudge_left();
    } else if target > input.paddle().x + step {
        input.nudge_right();
    }
}

fn seed_from_clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
