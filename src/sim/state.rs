//! Simulation state
//!
//! One emitter plus the bullet pool it and its branch payloads draw from.

use glam::Vec2;

use super::emitter::{Emitter, FireReport};
use super::pool::BulletPool;
use super::viewport::Viewport;
use crate::settings::{PatternSettings, SettingsError};

/// Everything a frame step touches
#[derive(Debug)]
pub struct SimState {
    pub emitter: Emitter,
    pub pool: BulletPool,
    /// Frames stepped
    pub time_ticks: u64,
    /// Simulated seconds
    pub time_secs: f64,
    /// Totals since creation
    pub fired: FireReport,
}

impl SimState {
    pub fn new(
        settings: &PatternSettings,
        viewport: Viewport,
        pool_capacity: usize,
    ) -> Result<Self, SettingsError> {
        Ok(Self {
            emitter: Emitter::new(settings, viewport)?,
            pool: BulletPool::new(pool_capacity, viewport.despawn_bounds()),
            time_ticks: 0,
            time_secs: 0.0,
            fired: FireReport::default(),
        })
    }

    /// Place the emitter at a world position
    pub fn with_emitter_at(mut self, world: Vec2) -> Self {
        self.emitter.set_position(world);
        self
    }

    /// Live bullets
    pub fn bullet_count(&self) -> usize {
        self.pool.active_count()
    }
}
