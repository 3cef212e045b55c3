//! Ledge Cam - a tile platformer with swappable camera-follow strategies
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (player physics, falling props, touch/interact behaviors)
//! - `camera`: 2D camera and the interchangeable follow strategies
//! - `level`: Built-in level data
//! - `render`: Renderer-agnostic draw list built once per frame
//! - `game`: Frame controller tying input, physics, camera and drawing together
//! - `tuning`: Data-driven physics constants

pub mod camera;
pub mod game;
pub mod level;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use camera::{Camera2D, CameraFollow, CameraMode, Viewport};
pub use game::{FrameInput, Game};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Downward acceleration applied to the player (pixels/s²)
    pub const GRAVITY: f32 = 800.0;
    /// Initial upward speed of a jump (pixels/s)
    pub const PLAYER_JUMP_SPEED: f32 = 450.0;
    /// Horizontal walking speed (pixels/s)
    pub const PLAYER_WALK_SPEED: f32 = 200.0;
    /// Radius of the probe circle used for touch/interact tests
    pub const TOUCH_RADIUS: f32 = 2.0;

    /// World size of one level tile
    pub const TILE_SIZE: f32 = 16.0;
    /// Size of one sprite in the tile atlas
    pub const ATLAS_SPRITE_SIZE: f32 = 8.0;
    /// Sprites per row in the tile atlas
    pub const ATLAS_SPRITES_PER_ROW: u32 = 26;
    /// Size of one frame in the player sprite sheet
    pub const PLAYER_SPRITE_SIZE: f32 = 16.0;
    /// Frames in the walk cycle
    pub const WALK_FRAMES: u32 = 8;
    /// Frame ticks per walk-cycle frame
    pub const WALK_FRAME_TICKS: u32 = 5;

    /// Pending render events kept per frame
    pub const RENDER_EVENT_CAPACITY: usize = 128;

    /// Zoom change per wheel notch
    pub const ZOOM_STEP: f32 = 0.05;
    pub const ZOOM_MIN: f32 = 0.25;
    pub const ZOOM_MAX: f32 = 3.0;

    /// Default window size
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;
}

/// Axis-aligned rectangle (top-left corner plus size)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True if `x` lies within the horizontal span (edges inclusive)
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        self.x <= x && self.right() >= x
    }

    /// Closest point of the rectangle to `point`
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.x, self.right()),
            point.y.clamp(self.y, self.bottom()),
        )
    }
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const GRAY: Color = Color::rgba(130, 130, 130, 255);
    pub const DARK_GRAY: Color = Color::rgba(80, 80, 80, 255);
    pub const LIGHT_GRAY: Color = Color::rgba(200, 200, 200, 255);
    pub const YELLOW: Color = Color::rgba(253, 249, 0, 255);
    pub const RED: Color = Color::rgba(230, 41, 55, 255);
    /// Fully transparent
    pub const BLANK: Color = Color::rgba(0, 0, 0, 0);
}

/// Circle/rectangle overlap test (edges count as touching)
#[inline]
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    rect.clamp_point(center).distance_squared(center) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_overlaps_rect() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);

        // Center inside
        assert!(circle_overlaps_rect(Vec2::new(15.0, 15.0), 2.0, &rect));
        // Just outside the left edge but within radius
        assert!(circle_overlaps_rect(Vec2::new(8.5, 15.0), 2.0, &rect));
        // Diagonal from the corner, out of reach
        assert!(!circle_overlaps_rect(Vec2::new(8.0, 8.0), 2.0, &rect));
        // Far away
        assert!(!circle_overlaps_rect(Vec2::new(100.0, 100.0), 2.0, &rect));
    }

    #[test]
    fn test_rect_spans_x_inclusive() {
        let rect = Rect::new(0.0, 400.0, 1200.0, 240.0);
        assert!(rect.spans_x(0.0));
        assert!(rect.spans_x(1200.0));
        assert!(!rect.spans_x(-0.1));
        assert!(!rect.spans_x(1200.1));
    }
}
