//! Bullet pool
//!
//! `ProjectilePool` is the only contract the emitter and branch payloads rely
//! on: allocation is bounded and may fail. `BulletPool` is the fixed-capacity
//! implementation the simulation driver uses.

use glam::Vec2;

use super::projectile::{Projectile, ProjectileKind};

/// Allocate-or-fail projectile source
pub trait ProjectilePool {
    /// Hand out a blank projectile at `origin`, or `None` when at capacity.
    ///
    /// The caller initialises motion and visuals; the pool keeps ownership.
    fn allocate(&mut self, kind: ProjectileKind, origin: Vec2) -> Option<&mut Projectile>;
}

/// Fixed-capacity slot array with a free list
#[derive(Debug)]
pub struct BulletPool {
    slots: Vec<Projectile>,
    active: Vec<bool>,
    free: Vec<usize>,
    /// Bullets outside ±bounds are recycled
    bounds: Vec2,
    /// Reused per update to snapshot live slots
    scratch: Vec<usize>,
}

impl BulletPool {
    /// Pre-allocate `capacity` inactive slots
    pub fn new(capacity: usize, bounds: Vec2) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, Projectile::default);
        Self {
            slots,
            active: vec![false; capacity],
            // Reversed so slot 0 is handed out first
            free: (0..capacity).rev().collect(),
            bounds,
            scratch: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Projectile> {
        self.slots
            .iter()
            .zip(&self.active)
            .filter_map(|(p, &live)| live.then_some(p))
    }

    /// Return every bullet to the pool
    pub fn clear(&mut self) {
        for i in 0..self.slots.len() {
            if self.active[i] {
                self.release(i);
            }
        }
    }

    fn release(&mut self, index: usize) {
        self.slots[index] = Projectile::default();
        self.active[index] = false;
        self.free.push(index);
    }

    fn out_of_bounds(&self, pos: Vec2) -> bool {
        pos.x.abs() > self.bounds.x || pos.y.abs() > self.bounds.y
    }

    /// Advance every live bullet by `dt`, recycle escapees, then tick payloads.
    ///
    /// Bullets allocated by payloads during this call wait until the next update.
    pub fn update(&mut self, dt: f32) {
        let mut live = std::mem::take(&mut self.scratch);
        live.clear();
        live.extend((0..self.slots.len()).filter(|&i| self.active[i]));

        for &i in &live {
            self.slots[i].advance(dt);
            let pos = self.slots[i].pos;
            if self.out_of_bounds(pos) {
                self.release(i);
                continue;
            }

            if let Some(mut payload) = self.slots[i].take_payload() {
                payload.on_tick(dt, pos, self);
                self.slots[i].attach(payload);
            }
        }

        self.scratch = live;
    }
}

impl ProjectilePool for BulletPool {
    fn allocate(&mut self, _kind: ProjectileKind, origin: Vec2) -> Option<&mut Projectile> {
        let index = self.free.pop()?;
        self.active[index] = true;
        let slot = &mut self.slots[index];
        *slot = Projectile::at(origin);
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::projectile::Sprite;

    const BOUNDS: Vec2 = Vec2::new(100.0, 100.0);

    #[test]
    fn test_allocate_until_exhausted() {
        let mut pool = BulletPool::new(3, BOUNDS);
        for _ in 0..3 {
            assert!(pool.allocate(ProjectileKind::Linear, Vec2::ZERO).is_some());
        }
        assert!(pool.allocate(ProjectileKind::Linear, Vec2::ZERO).is_none());
        assert_eq!(pool.active_count(), 3);
        assert_eq!(pool.capacity(), 3);
    }

    #[test]
    fn test_escapees_are_recycled() {
        let mut pool = BulletPool::new(2, BOUNDS);
        pool.allocate(ProjectileKind::Linear, Vec2::ZERO)
            .unwrap()
            .launch(Sprite::MainBullet, 100.0, 0.0, Vec2::X, 0.0);
        pool.allocate(ProjectileKind::Linear, Vec2::ZERO)
            .unwrap()
            .launch(Sprite::MainBullet, 10.0, 0.0, Vec2::X, 0.0);

        pool.update(0.5);
        assert_eq!(pool.active_count(), 2);
        pool.update(0.6);
        assert_eq!(pool.active_count(), 1);
        let survivor = pool.iter_active().next().unwrap();
        assert!((survivor.pos.x - 11.0).abs() < 1e-4);

        // Recycled slot is reusable and blank
        let p = pool.allocate(ProjectileKind::Linear, Vec2::Y).unwrap();
        assert_eq!(p.pos, Vec2::Y);
        assert_eq!(p.speed, 0.0);
    }

    #[test]
    fn test_clear() {
        let mut pool = BulletPool::new(4, BOUNDS);
        for _ in 0..4 {
            pool.allocate(ProjectileKind::Linear, Vec2::ZERO);
        }
        pool.clear();
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.iter_active().count(), 0);
    }
}
