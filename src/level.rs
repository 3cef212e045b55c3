//! Built-in level data
//!
//! Levels are authored in tile units: `tw(n)` converts tiles to pixels and
//! `atlas(col, row)` flattens a tile-atlas cell to a sprite index.

use glam::Vec2;

use crate::consts::{ATLAS_SPRITES_PER_ROW, TILE_SIZE};
use crate::sim::{Behavior, EnvItem, Motion};
use crate::{Color, Rect};

/// Player spawn point shared by the built-in levels
pub const DEFAULT_SPAWN: Vec2 = Vec2::new(400.0, 280.0);

/// Fall acceleration of loose keys (pixels/s²)
pub const KEY_GRAVITY: f32 = 1000.0;

/// An authored level: spawn point plus item templates
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub name: String,
    pub spawn: Vec2,
    pub items: Vec<EnvItem>,
}

/// Tiles to pixels
#[inline]
pub const fn tw(tiles: u32) -> f32 {
    tiles as f32 * TILE_SIZE
}

/// Atlas cell to flat sprite index
#[inline]
pub const fn atlas(col: u32, row: u32) -> u32 {
    col + row * ATLAS_SPRITES_PER_ROW
}

fn platform(x: f32, y: f32, tiles_wide: u32, sprite: u32) -> EnvItem {
    EnvItem::new("", Rect::new(x, y, tw(tiles_wide), tw(1)), true, Color::GRAY).with_tile(sprite, 1, 1)
}

fn key(x: f32, y: f32) -> EnvItem {
    EnvItem::new("key", Rect::new(x, y, tw(1), tw(1)), false, Color::YELLOW)
        .with_tile(atlas(7, 11), 1, 1)
        .with_motion(Motion::Falling(KEY_GRAVITY))
        .with_behavior(Behavior::Key)
}

fn door(x: f32, y: f32, keys_required: u32, linked_door: Option<usize>) -> EnvItem {
    EnvItem::new("door", Rect::new(x, y, tw(1), tw(2)), false, Color::RED)
        .with_tile(atlas(10, 16), 1, 2)
        .with_behavior(Behavior::Door {
            keys_required,
            linked_door,
        })
}

/// Shared ground and platforms
fn terrain() -> Vec<EnvItem> {
    vec![
        EnvItem::new("ground", Rect::new(0.0, 400.0, tw(75), tw(15)), true, Color::GRAY)
            .with_tile(atlas(0, 16), 1, 1),
        platform(300.0, 200.0, 25, atlas(2, 2)),
        platform(250.0, 300.0, 6, 2),
        platform(850.0, 100.0, 20, 2),
        platform(650.0, 300.0, 6, 2),
    ]
}

/// First level: backdrop, one key, a one-key door
pub fn level_one() -> Level {
    let mut items = vec![EnvItem::new(
        "bg",
        Rect::new(0.0, 0.0, tw(75), tw(25)),
        false,
        Color::rgba(27, 24, 24, 255),
    )];
    items.extend(terrain());
    items.push(key(500.0, 300.0));
    items.push(door(540.0, 168.0, 1, None));

    Level {
        name: "level 1".to_string(),
        spawn: DEFAULT_SPAWN,
        items,
    }
}

/// Second level: no backdrop, one key, a two-key door
pub fn level_two() -> Level {
    let mut items = terrain();
    items.push(key(500.0, 300.0));
    items.push(door(540.0, 168.0, 2, None));

    Level {
        name: "level 2".to_string(),
        spawn: DEFAULT_SPAWN,
        items,
    }
}

/// All built-in levels in play order
pub fn builtin_levels() -> Vec<Level> {
    vec![level_one(), level_two()]
}
