//! Crowd Volley headless demo
//!
//! Runs the pattern at a jittery frame rate and logs what happened.
//! Usage: `crowd-volley [settings.json]` (log level via `RUST_LOG`).

use std::process::ExitCode;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crowd_volley::PatternSettings;
use crowd_volley::consts::*;
use crowd_volley::sim::{SimState, TickInput, Viewport, tick};

/// Simulated run length (sec.)
const DEMO_SECONDS: f64 = 12.0;
/// Re-pull the trigger this often (sec.)
const BURST_EVERY: f64 = 2.5;
/// Frame time jitter range, as multiples of a 60 Hz frame
const JITTER: std::ops::Range<f32> = 0.5..3.0;
const SEED: u64 = 0xC0FFEE;

fn main() -> ExitCode {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => match PatternSettings::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => PatternSettings::default(),
    };
    log::info!(
        "Crowd Volley starting: {} ways x {} volleys, pool {}",
        settings.way_count,
        settings.rapid_count,
        POOL_CAPACITY
    );

    let viewport = Viewport::default();
    let mut state = match SimState::new(&settings, viewport, POOL_CAPACITY) {
        Ok(state) => state.with_emitter_at(Vec2::new(0.0, 120.0)),
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let mut rng = Pcg32::seed_from_u64(SEED);
    let mut next_burst = 0.0;
    let mut peak = 0;

    while state.time_secs < DEMO_SECONDS {
        let input = TickInput {
            pull_trigger: state.time_secs >= next_burst,
            ..Default::default()
        };
        if input.pull_trigger {
            next_burst += BURST_EVERY;
        }

        let dt = FRAME_TIME_60 * rng.random_range(JITTER);
        let report = tick(&mut state, &input, dt);
        if report.volleys > 1 {
            log::debug!(
                "Frame {} ({:.1} ms) caught up {} volleys",
                state.time_ticks,
                dt * 1000.0,
                report.volleys
            );
        }
        peak = peak.max(state.bullet_count());
    }

    log::info!(
        "{:.1}s in {} frames: {} volleys, {} main bullets, {} cut short, peak {} live bullets",
        state.time_secs,
        state.time_ticks,
        state.fired.volleys,
        state.fired.spawned,
        state.fired.exhausted,
        peak
    );
    println!(
        "volleys={} bullets={} exhausted={} peak={}",
        state.fired.volleys, state.fired.spawned, state.fired.exhausted, peak
    );
    ExitCode::SUCCESS
}
