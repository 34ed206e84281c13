//! Game settings and preferences
//!
//! Persisted as JSON separately from the score slots. Loading degrades to
//! defaults; the simulation never fails over a preferences file.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Host preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Mute all audio
    pub muted: bool,
    /// Start matches with the debug overlay on
    pub debug_overlay: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            debug_overlay: false,
        }
    }
}

impl Settings {
    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("bad settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save to a JSON file; failures are logged, not raised
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("failed to write {}: {err}", path.display());
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }

    /// Volumes clamped to [0, 1] whatever the file said
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load("/definitely/not/a/real/path.json");
        assert_eq!(settings.master_volume, Settings::default().master_volume);
    }

    #[test]
    fn test_sanitize_clamps_volumes() {
        let settings = Settings {
            master_volume: 7.0,
            sfx_volume: -1.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let path = std::env::temp_dir().join("skystrafe_test_settings.json");
        let settings = Settings {
            master_volume: 0.5,
            muted: true,
            ..Default::default()
        };
        settings.save(&path);
        let loaded = Settings::load(&path);
        assert_eq!(loaded.master_volume, 0.5);
        assert!(loaded.muted);
        let _ = std::fs::remove_file(&path);
    }
}
