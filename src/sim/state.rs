//! World state and core simulation types
//!
//! Everything the physics and interaction code mutates lives here. Rendering
//! only reads it.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::interact::Behavior;
use crate::level::Level;
use crate::{Color, Rect};

/// Direction the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Feet position (bottom center of the sprite)
    pub position: Vec2,
    /// Vertical speed (positive is down)
    pub speed: f32,
    /// Grounded last frame; gates jumping and interacting
    pub can_jump: bool,
    pub facing: Facing,
    /// Walk-cycle frame index
    pub anim_frame: u32,
    /// Ticks spent on the current walk-cycle frame
    pub anim_timer: u32,
    /// Keys collected and not yet spent on doors
    pub keys: u32,
}

impl Player {
    /// Fresh player standing (airborne) at `spawn`
    pub fn spawn(spawn: Vec2) -> Self {
        Self {
            position: spawn,
            speed: 0.0,
            can_jump: false,
            facing: Facing::Right,
            anim_frame: 0,
            anim_timer: 0,
            keys: 0,
        }
    }
}

/// How an item moves
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Motion {
    /// Never moves
    #[default]
    Static,
    /// Falls with the given acceleration until it lands on a blocking item
    Falling(f32),
}

/// How an item is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visual {
    /// Filled rectangle in the item's color
    Flat,
    /// Atlas sprite, tiled across the item
    Tile(u32),
}

/// Tile footprint of a sprite-drawn item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileFootprint {
    pub wide: u32,
    pub tall: u32,
}

impl Default for TileFootprint {
    fn default() -> Self {
        Self { wide: 1, tall: 1 }
    }
}

/// A rectangle in the level: ground, platform, prop, key, door...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvItem {
    /// Debug name (may be empty)
    pub name: String,
    pub rect: Rect,
    /// Solid surface the player and falling props land on
    pub blocking: bool,
    pub color: Color,
    pub visual: Visual,
    #[serde(default)]
    pub footprint: TileFootprint,
    #[serde(default)]
    pub motion: Motion,
    #[serde(default)]
    pub behavior: Behavior,

    // Transient state, reset on level load
    #[serde(skip)]
    pub fall_speed: f32,
    #[serde(skip)]
    pub key_taken: bool,
    #[serde(skip)]
    pub door_open: bool,
}

impl EnvItem {
    /// Static, flat-colored item with no behavior
    pub fn new(name: &str, rect: Rect, blocking: bool, color: Color) -> Self {
        Self {
            name: name.to_string(),
            rect,
            blocking,
            color,
            visual: Visual::Flat,
            footprint: TileFootprint::default(),
            motion: Motion::Static,
            behavior: Behavior::None,
            fall_speed: 0.0,
            key_taken: false,
            door_open: false,
        }
    }

    pub fn with_tile(mut self, atlas_index: u32, wide: u32, tall: u32) -> Self {
        self.visual = Visual::Tile(atlas_index);
        self.footprint = TileFootprint { wide, tall };
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Clear fall speed and key/door flags
    pub fn reset_transient(&mut self) {
        self.fall_speed = 0.0;
        self.key_taken = false;
        self.door_open = false;
    }
}

/// Failure to switch levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// Requested index is past the end of the level list
    OutOfRange { index: usize, count: usize },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::OutOfRange { index, count } => {
                write!(f, "level {index} does not exist ({count} levels loaded)")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// The active level plus the authored templates it was loaded from
#[derive(Debug, Clone)]
pub struct World {
    /// Authored levels (never mutated)
    levels: Vec<Level>,
    /// Index of the active level in `levels`
    active: usize,
    /// Live copy of the active level's items
    pub items: Vec<EnvItem>,
    pub player: Player,
}

impl World {
    /// Build a world over `levels` and load `start`
    pub fn new(levels: Vec<Level>, start: usize) -> Result<Self, LevelError> {
        let mut world = Self {
            levels,
            active: 0,
            items: Vec::new(),
            player: Player::spawn(Vec2::ZERO),
        };
        world.load_level(start)?;
        Ok(world)
    }

    /// Replace the live items with a fresh copy of level `index`
    pub fn load_level(&mut self, index: usize) -> Result<(), LevelError> {
        let level = self.levels.get(index).ok_or(LevelError::OutOfRange {
            index,
            count: self.levels.len(),
        })?;

        self.items = level.items.clone();
        for item in &mut self.items {
            item.reset_transient();
        }
        self.player = Player::spawn(level.spawn);
        self.active = index;

        log::info!(
            "Loaded level {} '{}' ({} items)",
            index,
            level.name,
            self.items.len()
        );
        Ok(())
    }

    /// Reload the active level (player respawn, all item state restored)
    pub fn reset(&mut self) {
        let active = self.active;
        // `active` always indexes a loaded level
        if let Err(e) = self.load_level(active) {
            log::warn!("Reset failed: {e}");
        }
    }

    pub fn active_level(&self) -> usize {
        self.active
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self) -> &Level {
        &self.levels[self.active]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::builtin_levels;

    #[test]
    fn test_load_level_resets_transient_state() {
        let mut world = World::new(builtin_levels(), 0).unwrap();
        for item in &mut world.items {
            item.fall_speed = 42.0;
            item.key_taken = true;
            item.door_open = true;
        }
        world.player.keys = 3;
        world.player.position = Vec2::new(-50.0, -50.0);

        world.reset();

        assert!(world.items.iter().all(|i| i.fall_speed == 0.0));
        assert!(world.items.iter().all(|i| !i.key_taken && !i.door_open));
        assert_eq!(world.player, Player::spawn(world.level().spawn));
    }

    #[test]
    fn test_reset_restores_item_geometry() {
        let mut world = World::new(builtin_levels(), 0).unwrap();
        let original = world.items.clone();
        world.items[1].rect.y += 500.0;
        world.items[1].color = Color::BLANK;

        world.reset();
        assert_eq!(world.items, original);
    }

    #[test]
    fn test_load_level_out_of_range() {
        let mut world = World::new(builtin_levels(), 0).unwrap();
        let count = world.level_count();
        let err = world.load_level(count).unwrap_err();
        assert_eq!(err, LevelError::OutOfRange { index: count, count });
        // Active level untouched
        assert_eq!(world.active_level(), 0);
    }
}
