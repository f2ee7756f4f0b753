//! Pattern settings
//!
//! Every tunable of the crowd pattern. Defaults mirror `consts`; a JSON file
//! may override any subset of fields.

use std::fmt;
use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors from loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read or written
    Io(std::io::Error),
    /// JSON was malformed
    Parse(serde_json::Error),
    /// A value would break the timing loop (field name, reason)
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "settings io: {err}"),
            SettingsError::Parse(err) => write!(f, "settings parse: {err}"),
            SettingsError::Invalid { field, reason } => write!(f, "settings.{field}: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
            SettingsError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

/// Crowd pattern tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSettings {
    // === Main volley ===
    /// Main bullet speed (px/sec.)
    pub shot_speed: f32,
    /// Time between volleys (sec.)
    pub shot_span: f32,
    /// Bullets per volley
    pub way_count: u32,
    /// Volleys per trigger pull
    pub rapid_count: u32,
    /// Main bullet sprite spin (deg/sec.)
    pub shot_spin: f32,

    // === Branches ===
    /// Branch bullet speed (px/sec.)
    pub branch_speed: f32,
    /// Delay before the first branch (sec.)
    pub branch_delay: f32,
    /// Time between branches (sec.)
    pub branch_span: f32,
    /// Heading turn per branch (deg.)
    pub branch_turn: f32,
    /// Spawn offset from the parent along the heading (px)
    pub branch_offset: f32,
    /// Branch collision rect (px)
    pub branch_extent: Vec2,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            shot_speed: SHOT_SPEED,
            shot_span: SHOT_SPAN,
            way_count: WAY_COUNT,
            rapid_count: RAPID_COUNT,
            shot_spin: SHOT_SPIN,

            branch_speed: BRANCH_SPEED,
            branch_delay: BRANCH_DELAY,
            branch_span: BRANCH_SPAN,
            branch_turn: BRANCH_TURN,
            branch_offset: BRANCH_OFFSET,
            branch_extent: Vec2::new(BRANCH_EXTENT_W, BRANCH_EXTENT_H),
        }
    }
}

impl PatternSettings {
    /// Angle between neighbouring ways (deg.)
    pub fn way_angle(&self) -> f32 {
        360.0 / self.way_count as f32
    }

    /// Reject values the emitter and branch timers cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let finite = [
            ("shot_speed", self.shot_speed),
            ("shot_span", self.shot_span),
            ("shot_spin", self.shot_spin),
            ("branch_speed", self.branch_speed),
            ("branch_delay", self.branch_delay),
            ("branch_span", self.branch_span),
            ("branch_turn", self.branch_turn),
            ("branch_offset", self.branch_offset),
            ("branch_extent", self.branch_extent.x),
            ("branch_extent", self.branch_extent.y),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(SettingsError::Invalid { field, reason: "must be finite" });
            }
        }
        if self.shot_span <= FLOAT_MINIMUM {
            return Err(SettingsError::Invalid { field: "shot_span", reason: "must be positive" });
        }
        if self.branch_span <= FLOAT_MINIMUM {
            return Err(SettingsError::Invalid {
                field: "branch_span",
                reason: "must be positive",
            });
        }
        if self.way_count == 0 {
            return Err(SettingsError::Invalid { field: "way_count", reason: "must be at least 1" });
        }
        if self.rapid_count == 0 {
            return Err(SettingsError::Invalid {
                field: "rapid_count",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded pattern settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("Pattern settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let s = PatternSettings::default();
        assert_eq!(s.way_count, WAY_COUNT);
        assert!((s.way_angle() - WAY_ANGLE).abs() < 1e-6);
        assert!((s.shot_span - FRAME_TIME_60 * 22.0).abs() < 1e-6);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = PatternSettings::from_json(r#"{ "way_count": 8, "rapid_count": 2 }"#).unwrap();
        assert_eq!(s.way_count, 8);
        assert_eq!(s.rapid_count, 2);
        assert!((s.way_angle() - 45.0).abs() < 1e-6);
        assert_eq!(s.branch_speed, BRANCH_SPEED);
    }

    #[test]
    fn test_rejects_zero_span() {
        let err = PatternSettings::from_json(r#"{ "shot_span": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "shot_span", .. }));

        let err = PatternSettings::from_json(r#"{ "way_count": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "way_count", .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = PatternSettings::from_json("{ way_count: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("settings parse"));
    }

    #[test]
    fn test_save_then_load() {
        let name = format!("crowd_volley_settings_{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        let mut s = PatternSettings::default();
        s.branch_turn = -3.5;
        s.save(&path).unwrap();
        let loaded = PatternSettings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, s);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PatternSettings::load("/nonexistent/crowd_volley.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
