//! Game settings and preferences
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::{CameraMode, Viewport};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::Tuning;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub screen_width: u32,
    pub screen_height: u32,
    /// Frame rate the host should aim for
    pub target_fps: u32,

    // === Camera ===
    /// Follow strategy wired into the frame loop
    pub camera_mode: CameraMode,

    // === Level ===
    /// Index into the built-in level list
    pub start_level: usize,

    // === Debug ===
    /// Start with item hitboxes drawn
    pub show_hitboxes: bool,

    /// Physics and zoom tuning
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            target_fps: 60,

            camera_mode: CameraMode::PlayerBoundsPush,

            start_level: 0,

            show_hitboxes: false,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.screen_width as f32, self.screen_height as f32)
    }

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
