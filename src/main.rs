use alien_runner::core::MonotonicClock;
use alien_runner::engine::game_loop::GameLoop;
use alien_runner::engine::input::{Control, InputManager};
use alien_runner::engine::physics::{presets, PhysicsWorld, RapierBody, RigidBodyHandle};
use alien_runner::game::hud::HeadsUpDisplay;
use alien_runner::game::player::{AnimationKey, PlayerController, PlayerEvent, Species};
use anyhow::Result;
use log::{debug, info, warn};
use winit::{
    dpi::LogicalPosition,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

/// Alien sprite size in pixels
const PLAYER_WIDTH: f32 = 66.0;
const PLAYER_HEIGHT: f32 = 92.0;

/// Everything alive for one level
struct Level {
    world: PhysicsWorld,
    player_body: RigidBodyHandle,
    player: PlayerController,
    hud: HeadsUpDisplay,
    input: InputManager,
    game_loop: GameLoop,
    last_animation: AnimationKey,
    last_status: String,
}

impl Level {
    fn new() -> Self {
        let mut world = PhysicsWorld::new();
        world.add_arena_bounds(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);

        let player_body = world.add_rigid_body(presets::player_body(
            WINDOW_WIDTH as f32 / 2.0,
            WINDOW_HEIGHT as f32 / 2.0,
        ));
        world.add_collider(
            presets::player_collider(PLAYER_WIDTH, PLAYER_HEIGHT),
            player_body,
        );

        let mut hud = HeadsUpDisplay::new();
        let player = PlayerController::new(MonotonicClock::new(), &mut hud);
        let last_animation = player.animation_key();

        Self {
            world,
            player_body,
            player,
            hud,
            input: InputManager::new(),
            game_loop: GameLoop::new(),
            last_animation,
            last_status: String::new(),
        }
    }

    /// Run however many fixed steps this frame owes
    fn frame(&mut self) {
        for _ in 0..self.game_loop.begin_frame() {
            self.step();
        }
    }

    fn step(&mut self) {
        for control in self.input.take_pressed() {
            match control {
                Control::SelectSlot(slot) => {
                    if let Some(species) = Species::from_slot(slot) {
                        self.player.switch_species(species, &mut self.hud);
                    }
                }
                Control::DebugDamage => self.player.damage(1, &mut self.hud),
                _ => {}
            }
        }

        let signals = self.input.signals();
        let pointer = self.input.pointer();
        let mut body = RapierBody::new(&mut self.world, self.player_body, PLAYER_HEIGHT / 2.0);
        self.player.tick(&signals, pointer, &mut body, &mut self.hud);

        self.world.step();
        self.hud.update(self.game_loop.step_millis());
        self.player
            .update_animation_timing(self.game_loop.fixed_timestep());

        self.handle_player_events();
        self.log_changes();
    }

    fn handle_player_events(&mut self) {
        for event in self.player.drain_events() {
            match event {
                // Running out of hearts on any species ends the run
                PlayerEvent::HeartsDepleted { species } => {
                    warn!("Game over: {} has no hearts left", species);
                    self.player.set_game_over(true);
                    self.game_loop.pause();
                }
                other => debug!("{:?}", other),
            }
        }
    }

    fn log_changes(&mut self) {
        let animation = self.player.animation_key();
        if animation != self.last_animation {
            debug!("Animation: {}", animation);
            self.last_animation = animation;
        }

        let status = format!("{} {}", self.player.species(), self.hud.status_line());
        if status != self.last_status {
            info!("{}", status);
            self.last_status = status;
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Alien Runner...");
    info!("Controls: A/D move, W jump, Space ability, 1-4 switch alien, H take a hit");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Alien Runner")
        .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut level = Level::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    level.input.process_keyboard_event(&event);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    // The camera never moves, so window coordinates are world coordinates
                    let position: LogicalPosition<f32> = position.to_logical(window.scale_factor());
                    level.input.set_cursor(position.x, position.y);
                }
                WindowEvent::Focused(false) => level.input.reset(),
                WindowEvent::RedrawRequested => {
                    level.frame();
                    window.request_redraw();
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
