//! Crowd Volley - radial bullet pattern with delayed branch shots
//!
//! Core modules:
//! - `sim`: Frame-stepped emitter, radial pattern, branch payloads and the bullet pool
//! - `settings`: Data-driven pattern tuning (JSON)

pub mod settings;
pub mod sim;

pub use settings::{PatternSettings, SettingsError};

use glam::Vec2;

/// Pattern configuration constants
pub mod consts {
    /// One frame at 60 Hz (sec.)
    pub const FRAME_TIME_60: f32 = 1.0 / 60.0;
    /// Timers at or below this are considered expired
    pub const FLOAT_MINIMUM: f32 = 1.0e-5;

    /// Main bullet speed (px/sec.)
    pub const SHOT_SPEED: f32 = 200.0;
    /// Time between volleys (sec.)
    pub const SHOT_SPAN: f32 = FRAME_TIME_60 * 22.0;
    /// Bullets per volley
    pub const WAY_COUNT: u32 = 16;
    /// Angle between neighbouring ways (deg.)
    pub const WAY_ANGLE: f32 = 360.0 / WAY_COUNT as f32;
    /// Volleys per trigger pull
    pub const RAPID_COUNT: u32 = 4;
    /// Main bullet sprite spin (deg/sec.)
    pub const SHOT_SPIN: f32 = 1080.0;

    /// Branch bullet speed (px/sec.)
    pub const BRANCH_SPEED: f32 = 150.0;
    /// Delay before a main bullet starts branching (sec.)
    pub const BRANCH_DELAY: f32 = FRAME_TIME_60 * 35.0;
    /// Time between branch shots (sec.)
    pub const BRANCH_SPAN: f32 = FRAME_TIME_60 * 5.0;
    /// Heading turn after each branch shot (deg.)
    pub const BRANCH_TURN: f32 = 2.0;
    /// Branch spawn offset along the heading (px), main bullets are long
    pub const BRANCH_OFFSET: f32 = 12.0;
    /// Branch collision rect (px), deliberately generous
    pub const BRANCH_EXTENT_W: f32 = 12.0;
    pub const BRANCH_EXTENT_H: f32 = 40.0;

    /// Default pool size
    pub const POOL_CAPACITY: usize = 4096;
    /// Bullets further than this outside the screen are recycled (px)
    pub const DESPAWN_MARGIN: f32 = 32.0;
}

/// Rotate `v` by `degrees` (positive = counter-clockwise, y up)
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Signed angle from `from` to `to` in degrees, in (-180, 180]
#[inline]
pub fn signed_angle_deg(from: Vec2, to: Vec2) -> f32 {
    from.perp_dot(to).atan2(from.dot(to)).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_deg_quarter_turns() {
        let v = rotate_deg(Vec2::X, 90.0);
        assert!((v - Vec2::Y).length() < 1e-6);
        let v = rotate_deg(Vec2::NEG_Y, -90.0);
        assert!((v - Vec2::NEG_X).length() < 1e-6);
    }

    #[test]
    fn test_signed_angle() {
        assert!((signed_angle_deg(Vec2::X, Vec2::Y) - 90.0).abs() < 1e-4);
        assert!((signed_angle_deg(Vec2::Y, Vec2::X) + 90.0).abs() < 1e-4);
        let a = rotate_deg(Vec2::NEG_Y, 11.25);
        assert!((signed_angle_deg(Vec2::NEG_Y, a) - 11.25).abs() < 1e-4);
    }
}
