//! Branch shots: a main bullet that periodically fires bullets of its own
//!
//! Each main bullet carries a `BranchSpawner`. After the initial delay it
//! fires one branch every `span` seconds along its stored heading, then turns
//! the heading. Even and odd volleys turn in opposite senses, so their branch
//! chains fan apart.

use std::any::Any;

use glam::Vec2;

use super::pool::ProjectilePool;
use super::projectile::{DrawLayer, ProjectileKind, Sprite, UpdatablePayload};
use crate::consts::FLOAT_MINIMUM;
use crate::rotate_deg;
use crate::settings::PatternSettings;

/// Volley parity, fixed when the carrier is spawned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(rapid_index: u32) -> Self {
        if rapid_index % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// Heading turn sign: even volleys turn counter-clockwise
    #[inline]
    pub fn turn_sign(self) -> f32 {
        match self {
            Parity::Even => 1.0,
            Parity::Odd => -1.0,
        }
    }
}

/// Branch timing and heading carried by a main bullet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchTag {
    /// Seconds until the next branch
    pub countdown: f32,
    heading: Vec2,
    parity: Parity,
}

impl BranchTag {
    pub fn new(countdown: f32, heading: Vec2, parity: Parity) -> Self {
        Self {
            countdown,
            heading: heading.normalize_or(Vec2::NEG_Y),
            parity,
        }
    }

    /// Unit direction of the next branch
    pub fn heading(&self) -> Vec2 {
        self.heading
    }

    pub fn parity(&self) -> Parity {
        self.parity
    }

    fn turn(&mut self, degrees: f32) {
        self.heading = rotate_deg(self.heading, degrees * self.parity.turn_sign());
    }
}

/// Branch bullet parameters shared by every carrier of a pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchParams {
    pub speed: f32,
    pub span: f32,
    /// deg.
    pub turn: f32,
    pub offset: f32,
    pub extent: Vec2,
}

impl From<&PatternSettings> for BranchParams {
    fn from(s: &PatternSettings) -> Self {
        Self {
            speed: s.branch_speed,
            span: s.branch_span,
            turn: s.branch_turn,
            offset: s.branch_offset,
            extent: s.branch_extent,
        }
    }
}

/// Payload that turns its carrier into a secondary emitter
#[derive(Debug, Clone)]
pub struct BranchSpawner {
    tag: BranchTag,
    params: BranchParams,
    spawned: u32,
    dropped: u32,
}

impl BranchSpawner {
    pub fn new(tag: BranchTag, params: BranchParams) -> Self {
        Self {
            tag,
            params,
            spawned: 0,
            dropped: 0,
        }
    }

    pub fn tag(&self) -> &BranchTag {
        &self.tag
    }

    /// Branches fired so far
    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    /// Branch attempts lost to an exhausted pool
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    fn fire(&mut self, parent_pos: Vec2, pool: &mut dyn ProjectilePool) {
        let dir = self.tag.heading;
        let point = parent_pos + dir * self.params.offset;
        match pool.allocate(ProjectileKind::Linear, point) {
            Some(bullet) => {
                bullet.launch(Sprite::BranchBullet, self.params.speed, 0.0, dir, 0.0);
                bullet.set_layer(DrawLayer::BulletBranch);
                bullet.set_collision_extent(self.params.extent);
                self.spawned += 1;
            }
            None => {
                log::error!(
                    "Bullet pool exhausted: branch at ({:.1}, {:.1}) dropped",
                    point.x,
                    point.y
                );
                self.dropped += 1;
            }
        }
    }
}

impl UpdatablePayload for BranchSpawner {
    fn on_tick(&mut self, elapsed: f32, parent_pos: Vec2, pool: &mut dyn ProjectilePool) {
        self.tag.countdown -= elapsed;
        if self.tag.countdown > FLOAT_MINIMUM {
            return;
        }

        self.fire(parent_pos, pool);

        // Turn and re-arm whether or not the branch made it out
        self.tag.turn(self.params.turn);
        self.tag.countdown += self.params.span;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
