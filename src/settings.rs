//! Game settings and preferences
//!
//! Persisted as JSON, separately from gameplay tuning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0), applies to ambience cues
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Silence everything
    pub muted: bool,

    // === Screen transitions ===
    /// Seconds to fade the gameplay screen in
    pub transition_on_secs: f32,
    /// Seconds to fade the gameplay screen out
    pub transition_off_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Audio
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,

            // Transitions
            transition_on_secs: 1.5,
            transition_off_secs: 0.5,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let mut settings: Self = serde_json::from_str(&json)?;
        settings.validate()?;
        settings.clamp_volumes();
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is unusable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {e}");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GameError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Reject values the mixer and transitions cannot use
    ///
    /// Volumes only need to be finite (out-of-range ones are clamped on load);
    /// transition times must also be non-negative.
    pub fn validate(&self) -> Result<(), GameError> {
        let volumes = [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
            ("music_volume", self.music_volume),
        ];
        for (field, value) in volumes {
            if !value.is_finite() {
                return Err(GameError::InvalidSetting { field, value });
            }
        }
        let transitions = [
            ("transition_on_secs", self.transition_on_secs),
            ("transition_off_secs", self.transition_off_secs),
        ];
        for (field, value) in transitions {
            if !value.is_finite() || value < 0.0 {
                return Err(GameError::InvalidSetting { field, value });
            }
        }
        Ok(())
    }

    fn clamp_volumes(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
    }
}
