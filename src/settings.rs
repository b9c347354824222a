//! Game settings and preferences
//!
//! Persisted as JSON next to the binary. Settings are the only thing this
//! crate ever writes to disk; world state is deliberately not saved.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Frame-rate cap (0 = uncapped)
    pub target_fps: u32,
    /// Start with the debug overlay visible
    pub debug_overlay: bool,
    /// Fixed world seed; `None` picks one from the wall clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            debug_overlay: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    pub const FILE: &'static str = "talisman_settings.json";

    /// Load settings from the default location, falling back to defaults
    /// when the file is missing or unreadable. Never fatal.
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("ignoring corrupt settings file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) {
        if let Err(e) = self.save_to(Path::new(Self::FILE)) {
            log::warn!("failed to save settings: {e}");
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.target_fps, 120);
        assert!(!s.debug_overlay);
        assert!(s.seed.is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings {
            target_fps: 60,
            debug_overlay: true,
            seed: Some(42),
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.target_fps, 60);
        assert!(back.debug_overlay);
        assert_eq!(back.seed, Some(42));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let s = Settings::load_from(Path::new("/nonexistent/talisman_settings.json"));
        assert_eq!(s.target_fps, Settings::default().target_fps);
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join("talisman_settings_test.json");
        let s = Settings {
            target_fps: 144,
            debug_overlay: true,
            seed: Some(7),
        };
        s.save_to(&path).unwrap();
        let back = Settings::load_from(&path);
        assert_eq!(back.target_fps, 144);
        assert_eq!(back.seed, Some(7));
        let _ = std::fs::remove_file(&path);
    }
}
