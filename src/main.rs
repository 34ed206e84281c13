//! Skystrafe headless runner
//!
//! Plays one seeded match on autopilot at a fixed timestep and records the
//! score. Useful for balance runs and as a reference host for the sim:
//!
//! ```text
//! skystrafe [seed] [max-frames]
//! ```

use skystrafe::audio::{AudioDirector, LogAudio};
use skystrafe::consts::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
use skystrafe::highscores::ScoreBoard;
use skystrafe::persistence::FileStore;
use skystrafe::settings::Settings;
use skystrafe::sim::{Arena, GameEvent, GameState, TickInput, tick};

const SETTINGS_PATH: &str = "skystrafe-settings.json";
const SCORES_PATH: &str = "skystrafe-scores.json";

/// Default frame budget for a demo run (ten minutes at 60 Hz)
const DEFAULT_MAX_FRAMES: u64 = 36_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random::<u64>);
    let max_frames = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FRAMES);

    let settings = Settings::load(SETTINGS_PATH).sanitized();
    if settings.debug_overlay {
        log::info!("debug overlay enabled from settings");
    }

    let mut audio = AudioDirector::new(LogAudio, &settings);
    let mut state = GameState::new(seed, Arena::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT));
    if settings.debug_overlay {
        state.debug = true;
    }
    audio.on_match_start();

    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let mut final_score = None;
    while state.time < max_frames {
        tick(&mut state, &input);
        for event in state.drain_events() {
            if let GameEvent::MatchEnded { score } = event {
                final_score = Some(score);
            }
            audio.handle(&[event]);
        }
        if final_score.is_some() {
            break;
        }
    }

    // Frame budget exhausted while still alive: end the match ourselves
    if final_score.is_none() {
        state.end();
        for event in state.drain_events() {
            if let GameEvent::MatchEnded { score } = event {
                final_score = Some(score);
            }
            audio.handle(&[event]);
        }
    }

    let score = final_score.unwrap_or(0);

    let mut store = FileStore::open(SCORES_PATH);
    let mut board = ScoreBoard::load(&store);
    let new_high = board.record(score);
    board.save(&mut store);
    store.flush();

    println!("seed {seed}: {} frames, score {score}", state.time);
    if new_high {
        println!("new high score!");
    } else {
        println!("high score: {}", board.high_score);
    }
}
