//! Arena Shooter headless host
//!
//! Drives the simulation at a fixed frame rate with the demo pilot at the
//! controls, the way a render loop would, and reports the outcome. Useful for
//! balance passes: point `--tuning` at a JSON file and watch how long the
//! pilot survives.

use std::path::PathBuf;
use std::process::ExitCode;

use arena_shooter::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use arena_shooter::{QualityPreset, Result, Settings, Tuning};
use clap::Parser;

/// Host frame rate
const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "arena-shooter")]
#[command(about = "Run the arena shooter simulation headless with the demo pilot")]
struct Args {
    /// Session RNG seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Frames to simulate at 60 fps before stopping
    #[arg(long, default_value_t = 18_000)]
    frames: u64,
    /// JSON file with tuning overrides
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// JSON file with settings
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Effects quality (low, medium, high); overrides the settings file
    #[arg(long, value_parser = parse_quality)]
    quality: Option<QualityPreset>,
    /// Print the final snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

fn parse_quality(s: &str) -> std::result::Result<QualityPreset, String> {
    QualityPreset::parse(s).ok_or_else(|| format!("unknown quality preset `{s}`"))
}

fn run(args: &Args) -> Result<()> {
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let settings = match &args.settings {
        Some(path) => {
            let mut settings = Settings::load(path)?;
            if let Some(quality) = args.quality {
                settings.quality = quality;
            }
            settings
        }
        None => Settings::from_preset(args.quality.unwrap_or_default()),
    };

    let mut state = GameState::with_config(args.seed, tuning, settings)?;
    log::info!("Arena Shooter (headless) starting with seed {}", args.seed);

    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, FRAME_DT);

    let pilot = TickInput {
        demo: true,
        ..Default::default()
    };
    let mut kills = 0u64;
    let mut waves = 0u64;
    for _ in 0..args.frames {
        tick(&mut state, &pilot, FRAME_DT);
        for event in state.drain_events() {
            match event {
                GameEvent::EnemyKilled { .. } => kills += 1,
                GameEvent::WaveSpawned { .. } => waves += 1,
                GameEvent::LivesChanged(lives) => log::info!("Lives: {}", lives),
                _ => {}
            }
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "Finished after {:.1}s simulated: score {}, {} kills, {} waves, phase {:?}",
        state.elapsed,
        state.score,
        kills,
        waves,
        state.phase
    );

    if args.snapshot {
        println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
