//! Radial multi-way volley
//!
//! A volley is `way_count` bullets evenly spaced around a full circle, starting
//! from straight down and stepping clockwise. The first two volleys of a burst
//! start half a step early, so they interleave with the later ones.

use glam::Vec2;

use super::branch::{BranchParams, BranchSpawner, BranchTag, Parity};
use super::pool::ProjectilePool;
use super::projectile::{DrawLayer, ProjectileKind, Sprite};
use crate::consts::FRAME_TIME_60;
use crate::settings::{PatternSettings, SettingsError};

/// Volleys below this rapid index get the half-step offset
const HALF_STEP_VOLLEYS: u32 = 2;

/// Outcome of one volley
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolleyReport {
    /// Bullets actually launched
    pub spawned: u32,
    /// Pool ran dry before every way was filled
    pub exhausted: bool,
}

/// Launch directions of one volley, in firing order
#[derive(Debug, Clone)]
pub struct Directions {
    dir: Vec2,
    step: Vec2,
    remaining: u32,
}

impl Iterator for Directions {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let dir = self.dir;
        self.dir = self.step.rotate(self.dir);
        Some(dir)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Directions {}

/// Pattern generator; stateless apart from its tuning
#[derive(Debug, Clone)]
pub struct RadialPattern {
    way_count: u32,
    /// Clockwise rotation by one way, as a unit complex number
    way_step: Vec2,
    /// Clockwise rotation by half a way
    half_step: Vec2,
    shot_speed: f32,
    shot_spin: f32,
    branch_delay: f32,
    branch: BranchParams,
}

impl RadialPattern {
    /// Fails on settings that fail `PatternSettings::validate`
    pub fn new(settings: &PatternSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let way_angle = settings.way_angle().to_radians();
        Ok(Self {
            way_count: settings.way_count,
            way_step: Vec2::from_angle(-way_angle),
            half_step: Vec2::from_angle(-way_angle * 0.5),
            shot_speed: settings.shot_speed,
            shot_spin: settings.shot_spin,
            branch_delay: settings.branch_delay,
            branch: BranchParams::from(settings),
        })
    }

    /// Directions for the volley with the given rapid index
    pub fn directions(&self, rapid_index: u32) -> Directions {
        let mut dir = Vec2::NEG_Y;
        if rapid_index < HALF_STEP_VOLLEYS {
            dir = self.half_step.rotate(dir);
        }
        Directions {
            dir,
            step: self.way_step,
            remaining: self.way_count,
        }
    }

    /// Fire one volley from `origin` (screen space).
    ///
    /// `overshoot` is how late the volley is relative to its ideal moment;
    /// bullets start that far along their path. Stops at the first refused
    /// allocation, keeping the bullets already launched.
    pub fn fire(
        &self,
        origin: Vec2,
        rapid_index: u32,
        overshoot: f32,
        pool: &mut dyn ProjectilePool,
    ) -> VolleyReport {
        let mut report = VolleyReport::default();
        let parity = Parity::of(rapid_index);

        for dir in self.directions(rapid_index) {
            let Some(bullet) = pool.allocate(ProjectileKind::Linear, origin) else {
                log::error!(
                    "Bullet pool exhausted: volley {} stopped at {}/{} ways",
                    rapid_index,
                    report.spawned,
                    self.way_count
                );
                report.exhausted = true;
                break;
            };

            // Branches fire back against the direction of travel
            let tag = BranchTag::new(FRAME_TIME_60 + self.branch_delay, -dir, parity);
            bullet.attach(Box::new(BranchSpawner::new(tag, self.branch)));
            bullet.launch(Sprite::MainBullet, self.shot_speed, self.shot_spin, dir, overshoot);
            bullet.set_layer(DrawLayer::BulletMain);
            report.spawned += 1;
        }

        report
    }
}
