//! Pooled projectile and its per-tick payload

use std::any::Any;
use std::fmt;

use glam::Vec2;

use super::pool::ProjectilePool;

/// Pool partition a projectile is requested from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileKind {
    /// Straight-line movers
    #[default]
    Linear,
}

/// Visual asset assigned at launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sprite {
    #[default]
    None,
    MainBullet,
    BranchBullet,
}

/// Draw order bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum DrawLayer {
    #[default]
    Default,
    BulletBranch,
    BulletMain,
}

/// Behaviour a projectile carries and runs once per simulation tick.
///
/// The owning update loop takes the payload out of the projectile while it
/// runs, so the payload is free to allocate from the same pool.
pub trait UpdatablePayload: fmt::Debug {
    /// `parent_pos` is the carrier's position after this tick's motion.
    fn on_tick(&mut self, elapsed: f32, parent_pos: Vec2, pool: &mut dyn ProjectilePool);

    fn as_any(&self) -> &dyn Any;
}

/// A straight-line bullet
#[derive(Debug, Default)]
pub struct Projectile {
    pub pos: Vec2,
    /// Unit travel direction
    pub dir: Vec2,
    /// px/sec.
    pub speed: f32,
    /// Sprite angular velocity (deg/sec.)
    pub spin: f32,
    /// Sprite rotation (deg.)
    pub angle: f32,
    pub sprite: Sprite,
    pub layer: DrawLayer,
    /// Collision rect, `None` keeps the sprite's default
    pub extent: Option<Vec2>,
    payload: Option<Box<dyn UpdatablePayload>>,
}

impl Projectile {
    /// Fresh, motionless projectile at `origin`
    pub fn at(origin: Vec2) -> Self {
        Self {
            pos: origin,
            ..Default::default()
        }
    }

    /// Start moving along `dir`, already advanced by `pre_advance` seconds
    pub fn launch(&mut self, sprite: Sprite, speed: f32, spin: f32, dir: Vec2, pre_advance: f32) {
        self.sprite = sprite;
        self.speed = speed;
        self.spin = spin;
        self.dir = dir;
        self.angle = dir.y.atan2(dir.x).to_degrees();
        self.advance(pre_advance);
    }

    /// Linear motion plus sprite spin
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.dir * self.speed * dt;
        if self.spin != 0.0 {
            self.angle = (self.angle + self.spin * dt) % 360.0;
        }
    }

    pub fn set_collision_extent(&mut self, extent: Vec2) {
        self.extent = Some(extent);
    }

    pub fn set_layer(&mut self, layer: DrawLayer) {
        self.layer = layer;
    }

    pub fn attach(&mut self, payload: Box<dyn UpdatablePayload>) {
        self.payload = Some(payload);
    }

    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    /// Typed view of the attached payload
    pub fn payload<T: 'static>(&self) -> Option<&T> {
        self.payload.as_deref()?.as_any().downcast_ref::<T>()
    }

    pub(crate) fn take_payload(&mut self) -> Option<Box<dyn UpdatablePayload>> {
        self.payload.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_pre_advances() {
        let mut p = Projectile::at(Vec2::new(10.0, 0.0));
        p.launch(Sprite::MainBullet, 200.0, 0.0, Vec2::NEG_Y, 0.5);
        assert!((p.pos - Vec2::new(10.0, -100.0)).length() < 1e-4);
        assert_eq!(p.sprite, Sprite::MainBullet);
        assert!((p.angle + 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_spin_wraps() {
        let mut p = Projectile::at(Vec2::ZERO);
        p.launch(Sprite::MainBullet, 0.0, 1080.0, Vec2::X, 0.0);
        p.advance(0.5);
        assert!((p.angle - 180.0).abs() < 1e-3);
        assert_eq!(p.pos, Vec2::ZERO);
    }

    #[test]
    fn test_fresh_projectile_is_blank() {
        let p = Projectile::at(Vec2::ONE);
        assert_eq!(p.pos, Vec2::ONE);
        assert_eq!(p.speed, 0.0);
        assert_eq!(p.layer, DrawLayer::Default);
        assert!(p.extent.is_none());
        assert!(!p.has_payload());
    }
}
