//! Test helpers.

use glam::Vec2;

use super::pool::ProjectilePool;
use super::projectile::{Projectile, ProjectileKind};

/// Pool that keeps every projectile it hands out, optionally failing after
/// a fixed number of allocations.
#[derive(Debug, Default)]
pub struct RecordingPool {
    pub spawned: Vec<Projectile>,
    pub limit: Option<usize>,
    pub refused: usize,
}

impl RecordingPool {
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Succeeds `n` times, then reports exhaustion
    pub fn failing_after(n: usize) -> Self {
        Self {
            limit: Some(n),
            ..Default::default()
        }
    }
}

impl ProjectilePool for RecordingPool {
    fn allocate(&mut self, _kind: ProjectileKind, origin: Vec2) -> Option<&mut Projectile> {
        if self.limit.is_some_and(|limit| self.spawned.len() >= limit) {
            self.refused += 1;
            return None;
        }
        self.spawned.push(Projectile::at(origin));
        self.spawned.last_mut()
    }
}
