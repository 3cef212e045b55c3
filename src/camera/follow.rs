//! Camera-follow strategies
//!
//! Each strategy is swappable behind `CameraFollow`. Only `EvenOutOnLanding`
//! carries state between frames.

use glam::Vec2;

use super::{Camera2D, CameraFollow, CameraMode, Viewport};
use crate::sim::{EnvItem, Player, world_bounds};

/// Target = player, offset = screen center
#[derive(Debug, Clone, Copy, Default)]
pub struct Center;

impl CameraFollow for Center {
    fn update(&mut self, camera: &mut Camera2D, player: &Player, _items: &[EnvItem], _dt: f32, viewport: Viewport) {
        camera.offset = viewport.center();
        camera.target = player.position;
    }

    fn mode(&self) -> CameraMode {
        CameraMode::Center
    }
}

/// Like `Center`, but shifts the offset so the view stays inside the level
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterInsideMap;

impl CameraFollow for CenterInsideMap {
    fn update(&mut self, camera: &mut Camera2D, player: &Player, items: &[EnvItem], _dt: f32, viewport: Viewport) {
        camera.target = player.position;
        camera.offset = viewport.center();

        let Some(bounds) = world_bounds(items) else {
            return;
        };

        let (w, h) = (viewport.width, viewport.height);
        let max = camera.world_to_screen(Vec2::new(bounds.right(), bounds.bottom()));
        let min = camera.world_to_screen(Vec2::new(bounds.x, bounds.y));

        if max.x < w {
            camera.offset.x = w - (max.x - w / 2.0);
        }
        if max.y < h {
            camera.offset.y = h - (max.y - h / 2.0);
        }
        if min.x > 0.0 {
            camera.offset.x = w / 2.0 - min.x;
        }
        if min.y > 0.0 {
            camera.offset.y = h / 2.0 - min.y;
        }
    }

    fn mode(&self) -> CameraMode {
        CameraMode::CenterInsideMap
    }
}

/// Eases the target toward the player once it drifts past a dead zone
#[derive(Debug, Clone, Copy)]
pub struct SmoothFollow {
    /// Slowest catch-up speed (pixels/s)
    pub min_speed: f32,
    /// Distance below which the camera stays put
    pub min_effect_length: f32,
    /// Catch-up speed as a fraction of the distance
    pub fraction_speed: f32,
}

impl Default for SmoothFollow {
    fn default() -> Self {
        Self {
            min_speed: 30.0,
            min_effect_length: 10.0,
            fraction_speed: 0.8,
        }
    }
}

impl CameraFollow for SmoothFollow {
    fn update(&mut self, camera: &mut Camera2D, player: &Player, _items: &[EnvItem], dt: f32, viewport: Viewport) {
        camera.offset = viewport.center();
        let diff = player.position - camera.target;
        let length = diff.length();

        if length > self.min_effect_length {
            let speed = (self.fraction_speed * length).max(self.min_speed);
            camera.target += diff * (speed * dt / length);
        }
    }

    fn mode(&self) -> CameraMode {
        CameraMode::SmoothFollow
    }
}

/// Tracks x directly; after landing, slides y to the new floor height
#[derive(Debug, Clone, Copy)]
pub struct EvenOutOnLanding {
    /// Vertical slide speed (pixels/s)
    pub even_out_speed: f32,
    evening_out: bool,
    even_out_target: f32,
}

impl Default for EvenOutOnLanding {
    fn default() -> Self {
        Self {
            even_out_speed: 700.0,
            evening_out: false,
            even_out_target: 0.0,
        }
    }
}

impl EvenOutOnLanding {
    /// True while sliding toward the landing height
    pub fn is_evening_out(&self) -> bool {
        self.evening_out
    }
}

impl CameraFollow for EvenOutOnLanding {
    fn update(&mut self, camera: &mut Camera2D, player: &Player, _items: &[EnvItem], dt: f32, viewport: Viewport) {
        camera.offset = viewport.center();
        camera.target.x = player.position.x;

        if self.evening_out {
            let step = self.even_out_speed * dt;
            if self.even_out_target > camera.target.y {
                camera.target.y += step;
                if camera.target.y > self.even_out_target {
                    camera.target.y = self.even_out_target;
                    self.evening_out = false;
                }
            } else {
                camera.target.y -= step;
                if camera.target.y < self.even_out_target {
                    camera.target.y = self.even_out_target;
                    self.evening_out = false;
                }
            }
        } else if player.can_jump && player.speed == 0.0 && player.position.y != camera.target.y {
            self.evening_out = true;
            self.even_out_target = player.position.y;
        }
    }

    fn mode(&self) -> CameraMode {
        CameraMode::EvenOutOnLanding
    }
}

/// Moves the camera only as far as needed to keep the player inside a
/// centered screen-space box
#[derive(Debug, Clone, Copy)]
pub struct PlayerBoundsPush {
    /// Box size as a fraction of the viewport
    pub bbox: Vec2,
}

impl Default for PlayerBoundsPush {
    fn default() -> Self {
        Self {
            bbox: Vec2::new(0.2, 0.2),
        }
    }
}

impl PlayerBoundsPush {
    /// World-space corners of the push box for `camera`
    pub fn world_box(&self, camera: &Camera2D, viewport: Viewport) -> (Vec2, Vec2) {
        let size = viewport.size();
        let min = camera.screen_to_world((Vec2::ONE - self.bbox) * 0.5 * size);
        let max = camera.screen_to_world((Vec2::ONE + self.bbox) * 0.5 * size);
        (min, max)
    }
}

impl CameraFollow for PlayerBoundsPush {
    fn update(&mut self, camera: &mut Camera2D, player: &Player, _items: &[EnvItem], _dt: f32, viewport: Viewport) {
        let (min, max) = self.world_box(camera, viewport);
        camera.offset = (Vec2::ONE - self.bbox) * 0.5 * viewport.size();

        let p = player.position;
        if p.x < min.x {
            camera.target.x = p.x;
        }
        if p.y < min.y {
            camera.target.y = p.y;
        }
        if p.x > max.x {
            camera.target.x = min.x + (p.x - max.x);
        }
        if p.y > max.y {
            camera.target.y = min.y + (p.y - max.y);
        }
    }

    fn mode(&self) -> CameraMode {
        CameraMode::PlayerBoundsPush
    }
}
