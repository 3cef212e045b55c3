//! Data-driven physics and camera constants
//!
//! Defaults mirror `crate::consts`; a settings file can override any field.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and input tuning shared by the simulation and frame controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration on the player (pixels/s²)
    pub gravity: f32,
    /// Upward speed applied on jump (pixels/s)
    pub jump_speed: f32,
    /// Horizontal walking speed (pixels/s)
    pub walk_speed: f32,
    /// Probe radius for touch and interact tests
    pub touch_radius: f32,
    /// Zoom change per wheel notch
    pub zoom_step: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_speed: PLAYER_JUMP_SPEED,
            walk_speed: PLAYER_WALK_SPEED,
            touch_radius: TOUCH_RADIUS,
            zoom_step: ZOOM_STEP,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
        }
    }
}

impl Tuning {
    /// Apply a wheel delta to `zoom`, clamped to the configured range
    pub fn apply_zoom(&self, zoom: f32, wheel: f32) -> f32 {
        (zoom + wheel * self.zoom_step).clamp(self.zoom_min, self.zoom_max)
    }
}
