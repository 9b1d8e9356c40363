//! Game settings and JSON loading helpers.
//!
//! Settings files are plain JSON; missing fields fall back to defaults, so
//! `{"komi": 7.5}` is a valid file.

use super::constants::{
    DEFAULT_BYO_YOMI_PERIODS, DEFAULT_BYO_YOMI_SECONDS, DEFAULT_KOMI, DEFAULT_MAIN_TIME_SECONDS,
    SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};
use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Komi and time control for one match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Points added to White's score
    pub komi: f64,
    /// Main thinking time per player, in seconds
    pub main_time: u32,
    /// Length of one byo-yomi period, in seconds
    pub byo_yomi_time: u32,
    /// Number of byo-yomi periods per player
    pub byo_yomi_periods: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            komi: DEFAULT_KOMI,
            main_time: DEFAULT_MAIN_TIME_SECONDS,
            byo_yomi_time: DEFAULT_BYO_YOMI_SECONDS,
            byo_yomi_periods: DEFAULT_BYO_YOMI_PERIODS,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !self.komi.is_finite() {
            return Err(format!("komi must be a finite number, got {}", self.komi));
        }
        if self.komi < 0.0 {
            return Err(format!("komi must not be negative, got {}", self.komi));
        }
        Ok(())
    }

    /// Parse settings from a JSON document and validate them.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: GameSettings = serde_json::from_str(json)?;
        settings.validate().map_err(SettingsError::Invalid)?;
        Ok(settings)
    }
}

/// Get the default settings path, `~/.stoneplay/settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Load settings from a JSON file.
pub fn load_settings(path: &Path) -> Result<GameSettings, SettingsError> {
    let json = fs::read_to_string(path)?;
    GameSettings::from_json(&json)
}

/// Load settings from a JSON file, returning defaults if it is missing or invalid.
pub fn load_settings_or_default(path: &Path) -> GameSettings {
    match load_settings(path) {
        Ok(settings) => settings,
        Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            GameSettings::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "using default settings");
            GameSettings::default()
        }
    }
}
