//! Ledge Cam entry point
//!
//! Headless run of the frame loop: a scripted route walks to the key, climbs
//! the platforms and opens the door while the draw list is logged. A windowed
//! host would feed real input into `Game::frame` and present each `Frame`.

#[cfg(not(target_arch = "wasm32"))]
use ledge_cam::{FrameInput, Game, Settings, render::Frame};

#[cfg(not(target_arch = "wasm32"))]
const DT: f32 = 1.0 / 60.0;

/// One leg of the scripted route
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
enum Step {
    /// Idle for a number of frames
    Wait(u32),
    /// Walk until the player is within one frame's stride of `x`
    WalkTo(f32),
    /// Jump in place and wait to land
    Jump,
    /// Press use for one frame
    Use,
}

#[cfg(not(target_arch = "wasm32"))]
const ROUTE: &[Step] = &[
    Step::Wait(60),
    Step::WalkTo(508.0),
    Step::WalkTo(700.0),
    Step::Jump,
    Step::WalkTo(680.0),
    Step::Jump,
    Step::WalkTo(548.0),
    Step::Use,
    Step::Wait(30),
];

/// Give up on a step after this many frames
#[cfg(not(target_arch = "wasm32"))]
const STEP_FRAME_LIMIT: u32 = 600;

#[cfg(not(target_arch = "wasm32"))]
struct Runner {
    game: Game,
    stride: f32,
    last_messages: Vec<String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Runner {
    fn frame(&mut self, input: &FrameInput) {
        let frame = self.game.frame(input, DT);
        self.report(&frame);
    }

    /// Log door messages whenever the visible set changes
    fn report(&mut self, frame: &Frame) {
        let messages: Vec<String> = frame
            .texts()
            .filter(|t| t.starts_with("Door") || t.starts_with("Press"))
            .map(str::to_string)
            .collect();
        if messages != self.last_messages {
            if messages.is_empty() {
                log::info!("[{}] message cleared", self.game.frame_index());
            } else {
                log::info!("[{}] message: {}", self.game.frame_index(), messages.join(" / "));
            }
            self.last_messages = messages;
        }
    }

    fn run(&mut self, step: Step) {
        match step {
            Step::Wait(frames) => {
                for _ in 0..frames {
                    self.frame(&FrameInput::default());
                }
            }
            Step::WalkTo(x) => {
                for _ in 0..STEP_FRAME_LIMIT {
                    let dx = x - self.game.world().player.position.x;
                    if dx.abs() <= self.stride {
                        return;
                    }
                    let input = FrameInput {
                        left: dx < 0.0,
                        right: dx > 0.0,
                        ..Default::default()
                    };
                    self.frame(&input);
                }
                log::warn!("Gave up walking to x={x}");
            }
            Step::Jump => {
                let jump = FrameInput {
                    jump: true,
                    ..Default::default()
                };
                self.frame(&jump);
                for _ in 0..STEP_FRAME_LIMIT {
                    if self.game.world().player.can_jump {
                        return;
                    }
                    self.frame(&FrameInput::default());
                }
                log::warn!("Never landed after jump");
            }
            Step::Use => {
                let interact = FrameInput {
                    interact: true,
                    ..Default::default()
                };
                self.frame(&interact);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ledge Cam (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(std::path::Path::new(&path)),
        None => Settings::default(),
    };
    log::info!(
        "Camera {} at {}x{}, {} fps",
        settings.camera_mode.as_str(),
        settings.screen_width,
        settings.screen_height,
        settings.target_fps
    );

    let game = match Game::new(&settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Could not start: {e}");
            std::process::exit(1);
        }
    };

    let mut runner = Runner {
        game,
        stride: settings.tuning.walk_speed * DT,
        last_messages: Vec::new(),
    };

    for &step in ROUTE {
        runner.run(step);
        let world = runner.game.world();
        let camera = runner.game.camera();
        log::info!(
            "[{}] {:?}: player ({:.1}, {:.1}) keys {} camera ({:.1}, {:.1})",
            runner.game.frame_index(),
            step,
            world.player.position.x,
            world.player.position.y,
            world.player.keys,
            camera.target.x,
            camera.target.y
        );
    }

    let opened = runner
        .game
        .world()
        .items
        .iter()
        .filter(|item| item.door_open)
        .count();
    log::info!("Done after {} frames, {} door(s) open", runner.game.frame_index(), opened);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on wasm
}
