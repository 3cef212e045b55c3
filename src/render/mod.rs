//! Renderer-agnostic draw list
//!
//! `build_frame` turns the world, the camera and the frame's queued render
//! events into plain draw commands. A host backend (window, GPU, terminal)
//! walks the list; nothing here touches a graphics API.

pub mod sprites;

use glam::Vec2;

use crate::camera::Camera2D;
use crate::sim::{Behavior, EnvItem, Player, RenderEvent, RenderEventKind, RenderEvents, Visual, World};
use crate::{Color, Rect};

/// Texture a sprite command samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sheet {
    /// Level tile atlas (8 px cells)
    Tiles,
    /// Player walk cycle (16 px cells)
    Player,
}

/// One draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        rect: Rect,
        color: Color,
    },
    Sprite {
        sheet: Sheet,
        src: Rect,
        dest: Rect,
        tint: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Everything needed to present one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear: Color,
    pub camera: Camera2D,
    /// Drawn in world space through `camera`
    pub world: Vec<DrawCmd>,
    /// Drawn in screen space on top
    pub hud: Vec<DrawCmd>,
}

impl Frame {
    /// All text drawn this frame, world layer first
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.world.iter().chain(self.hud.iter()).filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Build the draw list and drain `events` into it
pub fn build_frame(world: &World, camera: &Camera2D, events: &mut RenderEvents, debug_hitboxes: bool) -> Frame {
    let mut cmds = Vec::with_capacity(world.items.len() * 4 + events.len() * 2 + 1);

    for item in &world.items {
        draw_item(item, debug_hitboxes, &mut cmds);
    }

    for event in events.drain() {
        draw_event(&event, &world.items, &world.player, &mut cmds);
    }

    cmds.push(sprites::player_sprite(&world.player));

    Frame {
        clear: Color::LIGHT_GRAY,
        camera: *camera,
        world: cmds,
        hud: hud(&world.player),
    }
}

fn draw_item(item: &EnvItem, debug_hitboxes: bool, out: &mut Vec<DrawCmd>) {
    match item.visual {
        Visual::Flat => out.push(DrawCmd::Rect {
            rect: item.rect,
            color: item.color,
        }),
        Visual::Tile(index) => {
            sprites::item_tiles(item, index, out);
            if debug_hitboxes {
                out.push(DrawCmd::Rect {
                    rect: item.rect,
                    color: item.color,
                });
            }
        }
    }
}

fn draw_event(event: &RenderEvent, items: &[EnvItem], player: &Player, out: &mut Vec<DrawCmd>) {
    let Some(item) = items.get(event.item) else {
        log::warn!("Render event for missing item {}", event.item);
        return;
    };

    match event.kind {
        RenderEventKind::DoorMessage => {
            let text = event.message.text();
            let pos = Vec2::new(item.rect.x, item.rect.y - 32.0);
            let affordable = match item.behavior {
                Behavior::Door { keys_required, .. } => player.keys >= keys_required,
                _ => false,
            };
            let message = |text: String, pos: Vec2| DrawCmd::Text {
                text,
                pos,
                size: 12.0,
                color: Color::WHITE,
            };
            out.push(message(text.clone(), pos));
            if affordable {
                out.push(message(text, pos + Vec2::new(0.0, 12.0)));
            }
        }
    }
}

fn hud(player: &Player) -> Vec<DrawCmd> {
    let line = |text: String, x: f32, y: f32, color: Color| DrawCmd::Text {
        text,
        pos: Vec2::new(x, y),
        size: 10.0,
        color,
    };
    vec![
        line("Controls:".to_string(), 20.0, 20.0, Color::BLACK),
        line("- Right/Left to move".to_string(), 40.0, 40.0, Color::DARK_GRAY),
        line("- Space to jump, Enter to use".to_string(), 40.0, 60.0, Color::DARK_GRAY),
        line(
            "- Mouse Wheel to Zoom in-out, R to reset".to_string(),
            40.0,
            80.0,
            Color::DARK_GRAY,
        ),
        line(
            format!("Player xy {:.2},{:.2}", player.position.x, player.position.y),
            40.0,
            100.0,
            Color::DARK_GRAY,
        ),
        line(format!("Keys {}", player.keys), 40.0, 120.0, Color::WHITE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::builtin_levels;
    use crate::sim::Message;

    fn world() -> World {
        World::new(builtin_levels(), 0).unwrap()
    }

    #[test]
    fn test_build_frame_drains_events() {
        let world = world();
        let mut events = RenderEvents::default();
        events.push(RenderEvent::door_message(7, Message::DoorTakesKeys(1)));

        let frame = build_frame(&world, &Camera2D::default(), &mut events, false);
        assert!(events.is_empty());
        assert_eq!(frame.texts().filter(|t| *t == "Door Takes One Key").count(), 1);

        let frame = build_frame(&world, &Camera2D::default(), &mut events, false);
        assert_eq!(frame.texts().filter(|t| t.starts_with("Door")).count(), 0);
    }

    #[test]
    fn test_affordable_door_message_doubles() {
        let mut world = world();
        world.player.keys = 1;
        let mut events = RenderEvents::default();
        events.push(RenderEvent::door_message(7, Message::DoorTakesKeys(1)));

        let frame = build_frame(&world, &Camera2D::default(), &mut events, false);
        let positions: Vec<_> = frame
            .world
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { pos, .. } => Some(*pos),
                _ => None,
            })
            .collect();
        assert_eq!(positions, vec![Vec2::new(540.0, 136.0), Vec2::new(540.0, 148.0)]);
    }

    #[test]
    fn test_missing_item_event_skipped() {
        let world = world();
        let mut events = RenderEvents::default();
        events.push(RenderEvent::door_message(999, Message::PressUseToEnter));
        let frame = build_frame(&world, &Camera2D::default(), &mut events, false);
        assert_eq!(frame.texts().filter(|t| t.starts_with("Press")).count(), 0);
    }

    #[test]
    fn test_hitbox_overlay_only_in_debug() {
        let world = world();
        let mut events = RenderEvents::default();
        let rects = |frame: &Frame| {
            frame
                .world
                .iter()
                .filter(|c| matches!(c, DrawCmd::Rect { .. }))
                .count()
        };

        let plain = build_frame(&world, &Camera2D::default(), &mut events, false);
        let debug = build_frame(&world, &Camera2D::default(), &mut events, true);
        // Only the backdrop is flat in level one
        assert_eq!(rects(&plain), 1);
        assert_eq!(rects(&debug), world.items.len());
    }

    #[test]
    fn test_player_drawn_last_and_hud_keys() {
        let mut world = world();
        world.player.keys = 2;
        let mut events = RenderEvents::default();
        let frame = build_frame(&world, &Camera2D::default(), &mut events, false);

        assert!(matches!(
            frame.world.last(),
            Some(DrawCmd::Sprite {
                sheet: Sheet::Player,
                ..
            })
        ));
        assert!(frame.texts().any(|t| t == "Keys 2"));
    }

    proptest::proptest! {
        #[test]
        fn prop_events_drawn_exactly_once(count in 0usize..=crate::consts::RENDER_EVENT_CAPACITY) {
            let world = world();
            let mut events = RenderEvents::default();
            for _ in 0..count {
                events.push(RenderEvent::door_message(7, Message::PressUseToEnter));
            }

            let first = build_frame(&world, &Camera2D::default(), &mut events, false);
            let second = build_frame(&world, &Camera2D::default(), &mut events, false);
            proptest::prop_assert_eq!(first.texts().filter(|t| *t == "Press Use to Enter").count(), count);
            proptest::prop_assert_eq!(second.texts().filter(|t| *t == "Press Use to Enter").count(), 0);
        }
    }
}
