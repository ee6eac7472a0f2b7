//! Astro Shmup headless entry point
//!
//! Runs the simulation without a window: the autopilot plays a few minutes of
//! game time at a fixed frame rate and the leaderboard is printed at the end.
//!
//! Usage: `astro-shmup [tuning.json] [seed]`

use astro_shmup::sim::{GameEvent, GameSession, Playfield, autopilot};
use astro_shmup::{FixedStepDriver, Tuning, TuningError};

/// Headless playfield size
const PLAYFIELD_WIDTH: f32 = 800.0;
const PLAYFIELD_HEIGHT: f32 = 600.0;
/// Frames to simulate (three minutes at 60 fps)
const DEMO_FRAMES: u32 = 60 * 180;
const DEFAULT_SEED: u64 = 0x5EED;

fn main() {
    env_logger::init();
    log::info!("Astro Shmup (headless) starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), TuningError> {
    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(&path)?,
        None => Tuning::default(),
    };
    let seed = match args.next() {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Seed {raw:?} is not a number, using {DEFAULT_SEED}");
            DEFAULT_SEED
        }),
        None => DEFAULT_SEED,
    };

    let frame_dt = tuning.dt();
    let playfield = Playfield::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
    let mut session = GameSession::new(playfield, tuning, seed)?;
    let mut driver = FixedStepDriver::for_session(&session);

    for _ in 0..DEMO_FRAMES {
        if let Some(input) = autopilot::choose_input(&session) {
            session.handle_input(input);
        }
        driver.advance(&mut session, frame_dt);

        for event in session.drain_events() {
            match event {
                GameEvent::RoundOver { round, score, rank } => {
                    let placing = rank.map(|rank| format!(" (#{rank})")).unwrap_or_default();
                    println!("Round {round}: score {score}{placing}");
                }
                other => log::trace!("{other:?}"),
            }
        }
    }

    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(&session.snapshot()) {
            Ok(json) => log::debug!("Final frame: {json}"),
            Err(err) => log::warn!("Could not serialize final frame: {err}"),
        }
    }

    println!(
        "\n{} ticks simulated over {} round(s), seed {}",
        session.time_ticks(),
        session.round(),
        session.seed()
    );
    let scores = session.high_scores();
    if scores.is_empty() {
        println!("No scores recorded.");
    } else {
        println!("High scores:");
        for (rank, entry) in scores.entries.iter().enumerate() {
            println!(
                "  {:>2}. {:>4}  (round {}, tick {})",
                rank + 1,
                entry.score,
                entry.round,
                entry.tick
            );
        }
    }

    Ok(())
}
