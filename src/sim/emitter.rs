//! Trigger and shot timing
//!
//! The emitter turns frame time into volleys. A long frame can cross several
//! shot boundaries; each one fires its own volley with the bullets advanced by
//! how late that volley is, so a slow frame rate neither drops nor bunches
//! shots.

use glam::Vec2;

use super::pattern::{RadialPattern, VolleyReport};
use super::pool::ProjectilePool;
use super::viewport::Viewport;
use crate::consts::{FLOAT_MINIMUM, FRAME_TIME_60};
use crate::settings::{PatternSettings, SettingsError};

/// What one `run` call produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FireReport {
    pub volleys: u32,
    /// Bullets launched across all volleys
    pub spawned: u32,
    /// Volleys cut short by an exhausted pool
    pub exhausted: u32,
}

impl FireReport {
    fn record(&mut self, volley: VolleyReport) {
        self.volleys += 1;
        self.spawned += volley.spawned;
        if volley.exhausted {
            self.exhausted += 1;
        }
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: FireReport) {
        self.volleys += other.volleys;
        self.spawned += other.spawned;
        self.exhausted += other.exhausted;
    }
}

/// Burst-fire radial emitter
#[derive(Debug, Clone)]
pub struct Emitter {
    /// Trigger held
    firing: bool,
    /// Seconds until the next volley, may dip below zero inside `run`
    shot_wait: f32,
    /// Volleys fired since the trigger was pulled
    rapid_index: u32,
    shot_span: f32,
    rapid_count: u32,
    /// World position
    position: Vec2,
    viewport: Viewport,
    pattern: RadialPattern,
}

impl Emitter {
    /// Fails on settings that fail `PatternSettings::validate`; a zero span
    /// would keep `run` re-arming forever
    pub fn new(settings: &PatternSettings, viewport: Viewport) -> Result<Self, SettingsError> {
        Ok(Self {
            firing: false,
            shot_wait: 0.0,
            rapid_index: 0,
            shot_span: settings.shot_span,
            rapid_count: settings.rapid_count,
            position: Vec2::ZERO,
            viewport,
            pattern: RadialPattern::new(settings)?,
        })
    }

    pub fn is_firing(&self) -> bool {
        self.firing
    }

    pub fn rapid_index(&self) -> u32 {
        self.rapid_index
    }

    pub fn shot_wait(&self) -> f32 {
        self.shot_wait
    }

    pub fn set_position(&mut self, world: Vec2) {
        self.position = world;
    }

    /// Start a burst. The first volley goes out one frame later.
    pub fn pull_trigger(&mut self) {
        self.firing = true;
        self.shot_wait = FRAME_TIME_60;
        self.rapid_index = 0;
        log::debug!(
            "Trigger pulled at ({:.1}, {:.1})",
            self.position.x,
            self.position.y
        );
    }

    pub fn release_trigger(&mut self) {
        if self.firing {
            log::debug!("Trigger released after {} volleys", self.rapid_index);
        }
        self.firing = false;
    }

    /// Advance the shot timer by `elapsed` seconds, firing every volley due.
    pub fn run(&mut self, elapsed: f32, pool: &mut dyn ProjectilePool) -> FireReport {
        let mut report = FireReport::default();
        if !self.firing {
            return report;
        }

        self.shot_wait -= elapsed;
        // Each pass re-arms to a positive span, so the carried time shrinks
        while self.firing && self.shot_wait <= FLOAT_MINIMUM {
            let overshoot = (-self.shot_wait).max(0.0);
            self.shot_wait = self.shot_span;
            report.record(self.shot(overshoot, pool));

            if overshoot <= FLOAT_MINIMUM {
                break;
            }
            self.shot_wait -= overshoot;
        }

        report
    }

    fn shot(&mut self, overshoot: f32, pool: &mut dyn ProjectilePool) -> VolleyReport {
        let origin = self.viewport.world_to_screen(self.position);
        let volley = self.pattern.fire(origin, self.rapid_index, overshoot, pool);
        log::trace!(
            "Volley {} fired {} bullets ({:.4}s late)",
            self.rapid_index,
            volley.spawned,
            overshoot
        );

        self.rapid_index += 1;
        if self.rapid_index == self.rapid_count {
            self.release_trigger();
        }
        volley
    }
}
