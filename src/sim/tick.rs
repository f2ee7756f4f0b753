//! Variable timestep frame step
//!
//! Order within a frame: trigger input, emitter (may spawn volleys, already
//! advanced by their lateness), then the pool (moves bullets, recycles
//! escapees, runs branch payloads).

use glam::Vec2;

use super::emitter::FireReport;
use super::state::SimState;

/// Controller input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start a new burst
    pub pull_trigger: bool,
    /// Stop firing
    pub release_trigger: bool,
    /// Move the emitter (world units)
    pub emitter_pos: Option<Vec2>,
}

/// Advance the simulation by one frame of `dt` seconds
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) -> FireReport {
    if let Some(pos) = input.emitter_pos {
        state.emitter.set_position(pos);
    }
    if input.release_trigger {
        state.emitter.release_trigger();
    }
    if input.pull_trigger {
        state.emitter.pull_trigger();
    }

    let report = state.emitter.run(dt, &mut state.pool);
    state.pool.update(dt);

    state.time_ticks += 1;
    state.time_secs += dt as f64;
    state.fired.merge(report);
    report
}
