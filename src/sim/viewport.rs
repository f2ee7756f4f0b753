//! World to screen transform
//!
//! Bullets live in screen space centred on the middle of the screen (y up),
//! emitters live in world space.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DESPAWN_MARGIN;

/// Orthographic camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Camera position (world units)
    pub camera: Vec2,
    pub pixels_per_unit: f32,
    /// Screen size (px)
    pub size: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            camera: Vec2::ZERO,
            pixels_per_unit: 1.0,
            size: Vec2::new(960.0, 720.0),
        }
    }
}

impl Viewport {
    /// World point to pixels relative to the screen centre
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.camera) * self.pixels_per_unit
    }

    /// Half extent beyond which bullets are recycled
    pub fn despawn_bounds(&self) -> Vec2 {
        self.size * 0.5 + Vec2::splat(DESPAWN_MARGIN)
    }
}
