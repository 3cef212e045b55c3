//! 2D camera and follow strategies
//!
//! The camera maps world space to screen space as
//! `screen = rotate(world - target) * zoom + offset`. A `CameraFollow`
//! strategy rewrites `target` and `offset` once per frame; zoom and rotation
//! belong to the frame controller.

pub mod follow;

pub use follow::{Center, CenterInsideMap, EvenOutOnLanding, PlayerBoundsPush, SmoothFollow};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{EnvItem, Player};

/// Screen size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Screen-space center
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// 2D camera (world target, screen offset, zoom, rotation in degrees)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// World point drawn at `offset`
    pub target: Vec2,
    /// Screen position of `target`
    pub offset: Vec2,
    pub zoom: f32,
    /// Degrees, kept at zero by this game
    pub rotation: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            offset: Vec2::ZERO,
            zoom: 1.0,
            rotation: 0.0,
        }
    }
}

impl Camera2D {
    /// Camera looking at `target`, centered in `viewport`
    pub fn centered_on(target: Vec2, viewport: Viewport) -> Self {
        Self {
            target,
            offset: viewport.center(),
            ..Default::default()
        }
    }

    /// World-space point to screen-space
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let rotated = Vec2::from_angle(self.rotation.to_radians()).rotate(world - self.target);
        rotated * self.zoom + self.offset
    }

    /// Screen-space point to world-space
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let unscaled = (screen - self.offset) / self.zoom;
        Vec2::from_angle(-self.rotation.to_radians()).rotate(unscaled) + self.target
    }
}

/// Which follow strategy drives the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Player locked to screen center
    Center,
    /// Centered, but never showing past the level bounds
    CenterInsideMap,
    /// Eases toward the player outside a small dead zone
    SmoothFollow,
    /// Tracks x; re-centers y smoothly after landing
    EvenOutOnLanding,
    /// Pushes the view only when the player leaves a screen-space box
    #[default]
    PlayerBoundsPush,
}

impl CameraMode {
    pub const ALL: [CameraMode; 5] = [
        CameraMode::Center,
        CameraMode::CenterInsideMap,
        CameraMode::SmoothFollow,
        CameraMode::EvenOutOnLanding,
        CameraMode::PlayerBoundsPush,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CameraMode::Center => "center",
            CameraMode::CenterInsideMap => "center-inside-map",
            CameraMode::SmoothFollow => "smooth-follow",
            CameraMode::EvenOutOnLanding => "even-out-on-landing",
            CameraMode::PlayerBoundsPush => "player-bounds-push",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "center" => Some(CameraMode::Center),
            "center-inside-map" | "inside-map" => Some(CameraMode::CenterInsideMap),
            "smooth-follow" | "smooth" => Some(CameraMode::SmoothFollow),
            "even-out-on-landing" | "even-out" => Some(CameraMode::EvenOutOnLanding),
            "player-bounds-push" | "bounds-push" => Some(CameraMode::PlayerBoundsPush),
            _ => None,
        }
    }

    /// Fresh strategy instance for this mode
    pub fn follower(&self) -> Box<dyn CameraFollow> {
        match self {
            CameraMode::Center => Box::new(Center),
            CameraMode::CenterInsideMap => Box::new(CenterInsideMap),
            CameraMode::SmoothFollow => Box::new(SmoothFollow::default()),
            CameraMode::EvenOutOnLanding => Box::new(EvenOutOnLanding::default()),
            CameraMode::PlayerBoundsPush => Box::new(PlayerBoundsPush::default()),
        }
    }
}

/// A camera-follow strategy
///
/// Implementations update `target` and `offset` from the player and level,
/// and must leave `zoom` and `rotation` alone.
pub trait CameraFollow {
    fn update(
        &mut self,
        camera: &mut Camera2D,
        player: &Player,
        items: &[EnvItem],
        dt: f32,
        viewport: Viewport,
    );

    fn mode(&self) -> CameraMode;
}
