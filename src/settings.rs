//! Game settings and preferences
//!
//! Stored as JSON. Missing fields fall back to defaults so older files keep
//! loading.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::KeyBindings;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// Screen width; a level is three screens wide
    pub world_width: f32,
    /// Screen height; falling below it costs a life
    pub world_height: f32,

    // === Timing ===
    /// Longest frame the host passes to the simulation, in milliseconds.
    /// `None` passes frame times through unchanged.
    pub max_frame_ms: Option<f32>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Controls ===
    pub bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: 1024.0,
            world_height: 576.0,

            max_frame_ms: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Ignoring malformed settings {}: {}", path.display(), e),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Replace unusable values with defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !usable(self.world_width) {
            self.world_width = defaults.world_width;
        }
        if !usable(self.world_height) {
            self.world_height = defaults.world_height;
        }
        if self.max_frame_ms.is_some_and(|cap| !usable(cap)) {
            self.max_frame_ms = None;
        }
        self
    }

    /// Frame time the host should hand to `tick`
    pub fn frame_ms(&self, elapsed_ms: f32) -> f32 {
        match self.max_frame_ms {
            Some(cap) => elapsed_ms.min(cap),
            None => elapsed_ms,
        }
    }
}

/// Positive and finite
fn usable(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "world_height": 600.0, "muted": true }"#)
            .expect("valid json");
        assert_eq!(settings.world_width, 1024.0);
        assert_eq!(settings.world_height, 600.0);
        assert!(settings.muted);
        assert_eq!(settings.bindings, KeyBindings::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_frame_cap() {
        let mut settings = Settings::default();
        assert_eq!(settings.frame_ms(250.0), 250.0);
        settings.max_frame_ms = Some(1000.0 / 30.0);
        assert!((settings.frame_ms(250.0) - 33.333).abs() < 1e-2);
        assert_eq!(settings.frame_ms(10.0), 10.0);
    }

    #[test]
    fn test_sanitize_rejects_bad_dimensions() {
        let settings = Settings {
            world_width: -5.0,
            world_height: 0.0,
            max_frame_ms: Some(0.0),
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.world_width, 1024.0);
        assert_eq!(settings.world_height, 576.0);
        assert_eq!(settings.max_frame_ms, None);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "coin_hopper_settings_{}.json",
            std::process::id()
        ));
        let settings = Settings {
            world_width: 800.0,
            max_frame_ms: Some(50.0),
            ..Default::default()
        };
        settings.save(&path).expect("save settings");
        let loaded = Settings::load(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let loaded = Settings::load(Path::new("/nonexistent/coin_hopper.json"));
        assert_eq!(loaded, Settings::default());
    }
}
