//! Per-frame integration of the player and falling items
//!
//! Variable timestep: callers pass the frame delta directly.

use super::collision::find_landing;
use super::events::RenderEvents;
use super::state::{EnvItem, Facing, Motion, Player, World};
use crate::circle_overlaps_rect;
use crate::consts::{WALK_FRAMES, WALK_FRAME_TICKS};
use crate::tuning::Tuning;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Jump (held); only acts while grounded
    pub jump: bool,
    /// Interact (pressed this frame); only acts while grounded
    pub interact: bool,
}

/// Advance the player and every item by one frame
pub fn tick(world: &mut World, input: &TickInput, dt: f32, tuning: &Tuning, events: &mut RenderEvents) {
    update_player(&mut world.player, &mut world.items, input, dt, tuning, events);
    update_items(&mut world.player, &mut world.items, dt, tuning, events);
}

/// Walk, jump, interact, then resolve vertical motion against blocking items
pub fn update_player(
    player: &mut Player,
    items: &mut [EnvItem],
    input: &TickInput,
    dt: f32,
    tuning: &Tuning,
    events: &mut RenderEvents,
) {
    // Walk cycle
    if input.left || input.right {
        player.anim_timer += 1;
        if player.anim_timer > WALK_FRAME_TICKS {
            player.anim_frame = (player.anim_frame + 1) % WALK_FRAMES;
            player.anim_timer = 0;
        }
    } else {
        player.anim_frame = 0;
    }

    // Horizontal movement has no obstruction test
    if input.left {
        player.position.x -= tuning.walk_speed * dt;
        player.facing = Facing::Left;
    }
    if input.right {
        player.position.x += tuning.walk_speed * dt;
        player.facing = Facing::Right;
    }

    if input.jump && player.can_jump {
        player.speed = -tuning.jump_speed;
        player.can_jump = false;
    }

    if input.interact && player.can_jump {
        let target = items.iter().position(|item| {
            item.behavior.has_interact()
                && circle_overlaps_rect(player.position, tuning.touch_radius, &item.rect)
        });
        if let Some(idx) = target {
            let behavior = items[idx].behavior;
            behavior.on_interact(items, idx, player, dt, events);
        }
    }

    match find_landing(items, player.position, player.speed * dt, 0.0) {
        Some(landing) => {
            player.position.y = landing.y;
            player.speed = 0.0;
            player.can_jump = true;
        }
        None => {
            player.position.y += player.speed * dt;
            player.speed += tuning.gravity * dt;
            player.can_jump = false;
        }
    }
}

/// Let falling items drop and fire touch behaviors the player overlaps
pub fn update_items(
    player: &mut Player,
    items: &mut [EnvItem],
    dt: f32,
    tuning: &Tuning,
    events: &mut RenderEvents,
) {
    for idx in 0..items.len() {
        if let Motion::Falling(acceleration) = items[idx].motion {
            let item = &items[idx];
            let corner = glam::Vec2::new(item.rect.x, item.rect.y);
            let landing = find_landing(items, corner, item.fall_speed * dt, item.rect.height);

            let item = &mut items[idx];
            match landing {
                Some(landing) => {
                    item.fall_speed = 0.0;
                    item.rect.y = landing.y;
                }
                None => {
                    item.rect.y += item.fall_speed * dt;
                    item.fall_speed += acceleration * dt;
                }
            }
        }

        let behavior = items[idx].behavior;
        if behavior.has_touch()
            && circle_overlaps_rect(player.position, tuning.touch_radius, &items[idx].rect)
        {
            behavior.on_touch(items, idx, player, dt, events);
        }
    }
}
