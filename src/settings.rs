//! Game settings and preferences
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_RATE, MAX_ENEMY_SPEED, MAX_FRAME_RATE, MAX_PLAYER_SPEED};
use crate::error::StartupError;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Loop cadence
    pub frame_rate: u32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub muted: bool,
    /// Directory holding `coin_pickup.wav` and `lose.wav`
    pub asset_dir: Option<PathBuf>,

    // === Gameplay ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frame_rate: FRAME_RATE,
            master_volume: 0.8,
            muted: false,
            asset_dir: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Read and validate a settings file
    pub fn load(path: &Path) -> Result<Self, StartupError> {
        let json = fs::read_to_string(path).map_err(|source| StartupError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| StartupError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject values the loop or the simulation cannot work with
    pub fn validate(&self) -> Result<(), StartupError> {
        if !(1..=MAX_FRAME_RATE).contains(&self.frame_rate) {
            return Err(StartupError::invalid(
                "frame_rate",
                format!("{} is outside 1..={MAX_FRAME_RATE}", self.frame_rate),
            ));
        }
        if !(0.0..=1.0).contains(&self.master_volume) {
            return Err(StartupError::invalid(
                "master_volume",
                format!("{} is outside 0.0..=1.0", self.master_volume),
            ));
        }
        let tuning = &self.tuning;
        check_speed("tuning.player_speed", tuning.player_speed, MAX_PLAYER_SPEED)?;
        check_speed("tuning.enemy_speed", tuning.enemy_speed, MAX_ENEMY_SPEED)?;
        if tuning.enemy_spawn_interval_ms == 0 {
            return Err(StartupError::invalid(
                "tuning.enemy_spawn_interval_ms",
                "must be at least 1",
            ));
        }
        if let Some(margin) = tuning.enemy_cull_margin {
            if margin.is_nan() || margin < 0.0 {
                return Err(StartupError::invalid(
                    "tuning.enemy_cull_margin",
                    format!("{margin} is negative"),
                ));
            }
        }
        Ok(())
    }

    /// Wall-clock length of one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.tuning.enemy_spawn_interval_ms)
    }
}

/// Speeds are px per frame and must lie in `(0, max)`
fn check_speed(field: &'static str, speed: f32, max: f32) -> Result<(), StartupError> {
    if speed.is_finite() && speed > 0.0 && speed < max {
        Ok(())
    } else {
        Err(StartupError::invalid(
            field,
            format!("{speed} is outside (0, {max})"),
        ))
    }
}
