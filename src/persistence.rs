//! Settings persistence: save and load scope calibration to/from JSON.
//!
//! Only configuration is persisted, never waveform data. The stored form
//! is a serializable mirror of [`ScopeSettings`] so loading goes back
//! through the same validation as any other settings write.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::settings::{ScopeSettings, SettingsError};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Serializable version of ScopeSettings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsSerde {
    pub voltage_scale: f64,
    pub timebase: f64,
    pub trigger_level: f64,
    pub grid_divisions: [u32; 2],
}

impl From<&ScopeSettings> for SettingsSerde {
    fn from(s: &ScopeSettings) -> Self {
        let (gx, gy) = s.grid_divisions();
        Self {
            voltage_scale: s.voltage_scale(),
            timebase: s.timebase(),
            trigger_level: s.trigger_level(),
            grid_divisions: [gx, gy],
        }
    }
}

impl SettingsSerde {
    /// Apply stored values to a settings instance. Each field goes through
    /// the regular validated setter, so a tampered file cannot smuggle in
    /// an unusable scale.
    pub fn apply_to(self, s: &mut ScopeSettings) -> Result<(), SettingsError> {
        s.set_voltage_scale(self.voltage_scale)?;
        s.set_timebase(self.timebase)?;
        s.set_trigger_level(self.trigger_level)?;
        s.set_grid_divisions(self.grid_divisions[0], self.grid_divisions[1])?;
        Ok(())
    }
}

/// Write `settings` to `path` as pretty-printed JSON.
pub fn save_settings<P: AsRef<Path>>(
    path: P,
    settings: &ScopeSettings,
) -> Result<(), PersistenceError> {
    let stored = SettingsSerde::from(settings);
    let json = serde_json::to_string_pretty(&stored)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load settings from a JSON file written by [`save_settings`].
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<ScopeSettings, PersistenceError> {
    let json = std::fs::read_to_string(path)?;
    let stored: SettingsSerde = serde_json::from_str(&json)?;
    let mut settings = ScopeSettings::default();
    stored.apply_to(&mut settings)?;
    Ok(settings)
}
