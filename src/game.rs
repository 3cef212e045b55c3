//! Frame controller
//!
//! One `Game::frame` call is one logical frame: physics, then zoom/reset/debug
//! toggles, then the camera strategy, then the draw list. Render events queued
//! during physics are drained into that same frame's draw list.

use crate::camera::{Camera2D, CameraFollow, CameraMode, Viewport};
use crate::level::{Level, builtin_levels};
use crate::render::{Frame, build_frame};
use crate::settings::Settings;
use crate::sim::{LevelError, RenderEvents, TickInput, World, tick};
use crate::tuning::Tuning;

/// Host input snapshot for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Held
    pub left: bool,
    /// Held
    pub right: bool,
    /// Held
    pub jump: bool,
    /// Pressed this frame
    pub interact: bool,
    /// Pressed this frame: toggle hitbox overlay
    pub toggle_debug: bool,
    /// Pressed this frame: reset zoom and reload the level
    pub reset: bool,
    /// Mouse wheel notches this frame
    pub wheel: f32,
}

impl FrameInput {
    fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            jump: self.jump,
            interact: self.interact,
        }
    }
}

/// Owns the world, camera, follow strategy and per-frame event queue
pub struct Game {
    world: World,
    camera: Camera2D,
    follow: Box<dyn CameraFollow>,
    events: RenderEvents,
    viewport: Viewport,
    tuning: Tuning,
    debug_hitboxes: bool,
    frame_index: u64,
}

impl Game {
    /// Start on the built-in levels
    pub fn new(settings: &Settings) -> Result<Self, LevelError> {
        Self::with_levels(settings, builtin_levels())
    }

    /// Start on custom levels
    pub fn with_levels(settings: &Settings, levels: Vec<Level>) -> Result<Self, LevelError> {
        let world = World::new(levels, settings.start_level)?;
        let viewport = settings.viewport();
        let camera = Camera2D::centered_on(world.player.position, viewport);
        log::debug!("Camera follow: {}", settings.camera_mode.as_str());

        Ok(Self {
            world,
            camera,
            follow: settings.camera_mode.follower(),
            events: RenderEvents::default(),
            viewport,
            tuning: settings.tuning.clone(),
            debug_hitboxes: settings.show_hitboxes,
            frame_index: 0,
        })
    }

    /// Swap the follow strategy (takes effect next frame)
    pub fn set_follow(&mut self, follow: Box<dyn CameraFollow>) {
        log::debug!("Camera follow: {}", follow.mode().as_str());
        self.follow = follow;
    }

    /// Switch to another level, re-center the camera and restart the follow strategy
    pub fn load_level(&mut self, index: usize) -> Result<(), LevelError> {
        self.world.load_level(index)?;
        self.camera.target = self.world.player.position;
        self.follow = self.follow.mode().follower();
        self.events.clear();
        Ok(())
    }

    /// Run one frame and return what to draw
    pub fn frame(&mut self, input: &FrameInput, dt: f32) -> Frame {
        self.frame_index += 1;

        tick(&mut self.world, &input.tick_input(), dt, &self.tuning, &mut self.events);

        self.camera.zoom = self.tuning.apply_zoom(self.camera.zoom, input.wheel);

        if input.reset {
            log::debug!("Reset on frame {}", self.frame_index);
            self.camera.zoom = 1.0;
            self.world.reset();
        }
        if input.toggle_debug {
            self.debug_hitboxes = !self.debug_hitboxes;
        }

        self.follow.update(
            &mut self.camera,
            &self.world.player,
            &self.world.items,
            dt,
            self.viewport,
        );

        build_frame(&self.world, &self.camera, &mut self.events, self.debug_hitboxes)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.follow.mode()
    }

    pub fn debug_hitboxes(&self) -> bool {
        self.debug_hitboxes
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Center;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn settle(game: &mut Game) {
        for _ in 0..120 {
            game.frame(&FrameInput::default(), DT);
        }
    }

    /// Stand the player on the platform under the level-one door
    fn at_door(game: &mut Game) {
        let player = &mut game.world_mut().player;
        player.position = Vec2::new(545.0, 200.0);
        player.speed = 0.0;
    }

    #[test]
    fn test_player_lands_on_ground() {
        let mut game = Game::new(&Settings::default()).unwrap();
        settle(&mut game);
        let player = &game.world().player;
        assert_eq!(player.position.y, 400.0);
        assert!(player.can_jump);
    }

    #[test]
    fn test_key_settles_on_ground() {
        let mut game = Game::new(&Settings::default()).unwrap();
        settle(&mut game);
        assert_eq!(game.world().items[6].rect.y, 384.0);
    }

    #[test]
    fn test_door_message_visible_only_in_its_frame() {
        let mut game = Game::new(&Settings::default()).unwrap();
        at_door(&mut game);

        let frame = game.frame(&FrameInput::default(), DT);
        assert_eq!(frame.texts().filter(|t| *t == "Door Takes One Key").count(), 1);

        // Walk away: the message is gone next frame
        game.world_mut().player.position = Vec2::new(100.0, 400.0);
        let frame = game.frame(&FrameInput::default(), DT);
        assert_eq!(frame.texts().filter(|t| t.starts_with("Door")).count(), 0);
    }

    #[test]
    fn test_open_door_with_key() {
        let mut game = Game::new(&Settings::default()).unwrap();
        at_door(&mut game);
        game.world_mut().player.keys = 1;

        // Land first, then interact
        game.frame(&FrameInput::default(), DT);
        let use_door = FrameInput {
            interact: true,
            ..Default::default()
        };
        let frame = game.frame(&use_door, DT);

        assert!(game.world().items[7].door_open);
        assert_eq!(game.world().player.keys, 0);
        assert!(frame.texts().any(|t| t == "Press Use to Enter"));
    }

    #[test]
    fn test_reset_restores_level() {
        let mut game = Game::new(&Settings::default()).unwrap();
        settle(&mut game);
        let spawn = game.world().level().spawn;

        let zoom_in = FrameInput {
            wheel: 10.0,
            right: true,
            ..Default::default()
        };
        for _ in 0..30 {
            game.frame(&zoom_in, DT);
        }
        game.world_mut().player.keys = 4;
        game.world_mut().items[7].door_open = true;
        assert!(game.camera().zoom > 1.0);

        let reset = FrameInput {
            reset: true,
            ..Default::default()
        };
        game.frame(&reset, DT);

        assert_eq!(game.camera().zoom, 1.0);
        assert_eq!(game.world().player.position, spawn);
        assert_eq!(game.world().player.keys, 0);
        assert!(!game.world().items[7].door_open);
        assert_eq!(game.world().items[6].rect.y, 300.0);
        assert_eq!(game.world().items[6].fall_speed, 0.0);
    }

    #[test]
    fn test_debug_toggle() {
        let mut game = Game::new(&Settings::default()).unwrap();
        let toggle = FrameInput {
            toggle_debug: true,
            ..Default::default()
        };
        game.frame(&toggle, DT);
        assert!(game.debug_hitboxes());
        game.frame(&toggle, DT);
        assert!(!game.debug_hitboxes());
    }

    #[test]
    fn test_swap_follow_strategy() {
        let mut game = Game::new(&Settings::default()).unwrap();
        assert_eq!(game.camera_mode(), CameraMode::PlayerBoundsPush);

        game.set_follow(Box::new(Center));
        game.frame(&FrameInput::default(), DT);
        assert_eq!(game.camera_mode(), CameraMode::Center);
        assert_eq!(game.camera().target, game.world().player.position);
    }

    #[test]
    fn test_every_mode_runs() {
        for mode in CameraMode::ALL {
            let settings = Settings {
                camera_mode: mode,
                ..Default::default()
            };
            let mut game = Game::new(&settings).unwrap();
            settle(&mut game);
            let target = game.camera().target;
            assert!(target.is_finite(), "{}", mode.as_str());
        }
    }

    #[test]
    fn test_bad_start_level() {
        let settings = Settings {
            start_level: 9,
            ..Default::default()
        };
        assert!(Game::new(&settings).is_err());
    }

    #[test]
    fn test_load_level_restarts_follow_strategy() {
        let settings = Settings {
            camera_mode: CameraMode::EvenOutOnLanding,
            ..Default::default()
        };
        let mut game = Game::new(&settings).unwrap();
        settle(&mut game);

        // Land on the upper platform so the camera starts sliding toward it
        at_door(&mut game);
        game.frame(&FrameInput::default(), DT);
        assert!(game.world().player.can_jump);

        game.load_level(1).unwrap();
        assert_eq!(game.camera_mode(), CameraMode::EvenOutOnLanding);

        // A fresh strategy holds y while the player is still airborne
        game.frame(&FrameInput::default(), DT);
        let spawn = game.world().level().spawn;
        assert_eq!(game.camera().target, spawn);
    }

    #[test]
    fn test_load_second_level() {
        let mut game = Game::new(&Settings::default()).unwrap();
        game.load_level(1).unwrap();
        assert_eq!(game.world().active_level(), 1);
        assert!(game.load_level(2).is_err());
        assert_eq!(game.world().active_level(), 1);
    }
}
