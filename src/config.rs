//! Game settings
//!
//! Read from a JSON file at startup. Any field left out of the file keeps its default.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use serde::{Deserialize, Serialize};

use crate::entities::EnemyKind;

/// Settings file looked up in the working directory when no path is given
pub const DEFAULT_SETTINGS_FILE: &str = "bug-crossing.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Lives at the start of a game
    pub lives: u8,
    /// Enemies on the board, one entry per enemy
    pub roster: Vec<EnemyKind>,
    /// Added to the speed multiplier for every round won
    pub speed_step: f32,

    // === Frame timing ===
    /// Longest tick the simulation will take, in seconds
    pub max_frame_dt: f32,
    /// Sleep between frames
    pub frame_sleep_ms: u64,

    // === Audio ===
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub hit_sound: PathBuf,
    pub win_sound: PathBuf,

    pub log_file: PathBuf,
    /// Fixed RNG seed, random when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lives: 3,
            roster: vec![
                EnemyKind::Bug,
                EnemyKind::Bug,
                EnemyKind::Fast,
                EnemyKind::VeryFast,
            ],
            speed_step: 0.25,

            max_frame_dt: 0.1,
            frame_sleep_ms: 16,

            sfx_volume: 0.3,
            hit_sound: PathBuf::from("assets/sounds/hit.wav"),
            win_sound: PathBuf::from("assets/sounds/win.wav"),

            log_file: PathBuf::from("bug-crossing.log"),
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults,
    /// a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .wrap_err_with(|| format!("invalid settings in {}", path.display()))?;
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Clamps values the game can't run with
    fn sanitized(mut self) -> Self {
        self.lives = self.lives.max(1);
        self.speed_step = self.speed_step.max(0.0);
        self.max_frame_dt = self.max_frame_dt.clamp(0.001, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "lives": 5, "seed": 42 }"#).unwrap();
        assert_eq!(settings.lives, 5);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.roster, Settings::default().roster);
        assert_eq!(settings.speed_step, 0.25);
    }

    #[test]
    fn test_roster_kinds_parse() {
        let settings =
            Settings::from_json(r#"{ "roster": ["very_fast", "fast", "bug"] }"#).unwrap();
        assert_eq!(
            settings.roster,
            vec![EnemyKind::VeryFast, EnemyKind::Fast, EnemyKind::Bug]
        );
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let settings =
            Settings::from_json(r#"{ "lives": 0, "sfx_volume": 4.0, "speed_step": -1.0 }"#)
                .unwrap();
        assert_eq!(settings.lives, 1);
        assert_eq!(settings.sfx_volume, 1.0);
        assert_eq!(settings.speed_step, 0.0);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ lives: ").is_err());
        assert!(Settings::from_json(r#"{ "roster": ["dragon"] }"#).is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load(Path::new("definitely/not/here.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
