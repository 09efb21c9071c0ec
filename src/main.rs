//! Gap Runner entry point
//!
//! Headless native bootstrap: loads config, wires the real clock, a seeded RNG
//! and the autopilot into the loop driver, and logs what a renderer would draw.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use gap_runner::platform::{Autopilot, Clock, Pcg32RandomSource, SystemClock};
use gap_runner::sim::{AdvanceReport, GameEvent, GameState};
use gap_runner::{FrameSink, GameLoopDriver, SimConfig};

/// Pause between presented frames (stands in for vsync)
const FRAME_PAUSE: Duration = Duration::from_millis(7);

/// Autopilot jumps when this close to the gap floor
const AUTOPILOT_CLEARANCE: f32 = 24.0;

/// CLI arguments
#[derive(Parser)]
#[command(name = "gap-runner")]
#[command(about = "Headless gap-runner session driven by the autopilot")]
struct Args {
    /// Simulation config file (JSON); defaults apply to missing fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed; derived from the system time when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Session length in seconds
    #[arg(long, default_value_t = 30)]
    seconds: u64,
}

/// Logs gameplay events in place of drawing them
#[derive(Default)]
struct LogRenderer {
    passed: u64,
    collisions: u64,
}

impl FrameSink for LogRenderer {
    fn present(&mut self, state: &GameState, report: &AdvanceReport) {
        if report.clamped {
            log::debug!("Frame clamped after stall ({} ticks)", report.ticks);
        }
        for event in &state.events {
            match *event {
                GameEvent::PairSpawned => log::trace!("Pair spawned ({} live)", state.pair_count()),
                GameEvent::ObstaclesPassed { count } => {
                    self.passed += u64::from(count);
                    log::info!("Score {} (high {})", state.score, state.high_score);
                }
                GameEvent::Collided { lost_score } => {
                    self.collisions += 1;
                    log::info!("Crashed, lost {lost_score} points");
                }
                GameEvent::NewHighScore { score } => log::info!("New high score: {score}"),
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock before 1970")?
            .as_nanos() as u64,
    };
    log::info!("Gap Runner (headless) starting, seed {seed}, {} s", args.seconds);

    let mut driver = GameLoopDriver::new(
        config,
        SystemClock::new(),
        Autopilot::new(AUTOPILOT_CLEARANCE),
        Pcg32RandomSource::new(seed),
    )?;

    let session = SystemClock::new();
    let deadline_ms = args.seconds.saturating_mul(1000);
    let mut renderer = LogRenderer::default();
    loop {
        if session.now_ms() >= deadline_ms {
            driver.request_quit();
        }
        if !driver.run_frame(&mut renderer) {
            break;
        }
        std::thread::sleep(FRAME_PAUSE);
    }

    let state = driver.state();
    log::info!(
        "Done: {} frames, {} ticks, {} pairs passed, {} crashes, high score {}",
        driver.frame_count(),
        state.tick_count,
        renderer.passed,
        renderer.collisions,
        state.high_score.max(state.score)
    );
    Ok(())
}
