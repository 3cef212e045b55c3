//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of drawing:
//! - Variable timestep, one call per frame
//! - Stable iteration order (array order of the active level)
//! - Behaviors report visual side effects through `RenderEvents` only

pub mod collision;
pub mod events;
pub mod interact;
pub mod state;
pub mod tick;

pub use collision::{Landing, crosses_surface, find_landing, world_bounds};
pub use events::{Message, RenderEvent, RenderEventKind, RenderEvents};
pub use interact::Behavior;
pub use state::{EnvItem, Facing, LevelError, Motion, Player, TileFootprint, Visual, World};
pub use tick::{TickInput, tick, update_items, update_player};
