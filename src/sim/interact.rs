//! Touch and interact behaviors attached to level items
//!
//! Touch behaviors run every frame the player overlaps the item. Interact
//! behaviors run once per interact press, on the first overlapping item that
//! has one.

use serde::{Deserialize, Serialize};

use super::events::{Message, RenderEvent, RenderEvents};
use super::state::{EnvItem, Player, Visual};
use crate::Color;

/// Per-item behavior, chosen when the level is authored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Behavior {
    /// Inert scenery
    #[default]
    None,
    /// Collectible key, picked up on touch
    Key,
    /// Door that consumes keys to open
    Door {
        /// Keys spent to open the door
        keys_required: u32,
        /// Index of a sibling door in the same level (reserved, not read)
        linked_door: Option<usize>,
    },
}

impl Behavior {
    /// True if touching the item does something
    pub fn has_touch(&self) -> bool {
        matches!(self, Behavior::Key | Behavior::Door { .. })
    }

    /// True if interacting with the item does something
    pub fn has_interact(&self) -> bool {
        matches!(self, Behavior::Door { .. })
    }

    /// Player overlaps `items[index]` this frame
    pub fn on_touch(
        &self,
        items: &mut [EnvItem],
        index: usize,
        player: &mut Player,
        _dt: f32,
        events: &mut RenderEvents,
    ) {
        let Some(item) = items.get_mut(index) else {
            return;
        };

        match *self {
            Behavior::None => {}
            Behavior::Key => {
                if item.key_taken {
                    return; // walked over where the key was
                }
                log::info!("Picked up '{}'", item.name);
                item.key_taken = true;
                item.visual = Visual::Flat;
                item.color = Color::BLANK;
                player.keys += 1;
            }
            Behavior::Door { keys_required, .. } => {
                let message = if item.door_open {
                    Message::PressUseToEnter
                } else if keys_required > 0 {
                    Message::DoorTakesKeys(keys_required)
                } else {
                    return;
                };
                events.push(RenderEvent::door_message(index, message));
            }
        }
    }

    /// Player pressed interact while grounded and overlapping `items[index]`
    pub fn on_interact(
        &self,
        items: &mut [EnvItem],
        index: usize,
        player: &mut Player,
        _dt: f32,
        _events: &mut RenderEvents,
    ) {
        let Some(item) = items.get_mut(index) else {
            return;
        };

        if let Behavior::Door { keys_required, .. } = *self {
            if item.door_open || player.keys < keys_required {
                return;
            }
            player.keys -= keys_required;
            item.door_open = true;
            log::info!("Opened '{}' with {} key(s)", item.name, keys_required);
        }
    }
}
