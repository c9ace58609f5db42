//! Simulation engine: owns the world and advances it one frame at a time.
//!
//! `SimulationEngine` owns the hecs world, processes session commands,
//! runs all systems once per frame, and produces `FrameSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use sidescroller_core::commands::SessionCommand;
use sidescroller_core::constants::{DEFAULT_THEME_COLOR, MAX_HEALTH};
use sidescroller_core::enums::SessionPhase;
use sidescroller_core::events::GameEvent;
use sidescroller_core::input::InputState;
use sidescroller_core::level::LevelDescriptor;
use sidescroller_core::render::{Camera, DrawCommand};
use sidescroller_core::state::FrameSnapshot;
use sidescroller_core::types::{Aabb, Color, SimTime, Viewport};

use crate::queries;
use crate::systems;
use crate::systems::render::RenderInputs;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial physical display size.
    pub viewport: Viewport,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            viewport: Viewport::default(),
        }
    }
}

/// Per-frame values handed to the snapshot builder.
pub struct FrameContext<'a> {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub level_index: usize,
    pub level_name: &'a str,
    pub health: u8,
}

/// The simulation engine. Owns the ECS world and all per-level state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SessionPhase,
    rng: ChaCha8Rng,
    input: InputState,
    viewport: Viewport,
    descriptor: LevelDescriptor,
    level_index: usize,
    level_name: String,
    theme: Color,
    health: u8,
    next_projectile_seq: u64,
    command_queue: VecDeque<SessionCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine running the first level of `descriptor`.
    pub fn new(config: SimConfig, descriptor: LevelDescriptor) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SessionPhase::Running,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            input: InputState::default(),
            viewport: config.viewport,
            descriptor,
            level_index: 0,
            level_name: String::new(),
            theme: Color::new(DEFAULT_THEME_COLOR),
            health: MAX_HEALTH,
            next_projectile_seq: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };
        engine.rebuild();
        engine
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame.
    ///
    /// Returns `None` once the level is complete: nothing moves and
    /// nothing is drawn until a rebuild command arrives.
    pub fn tick(&mut self) -> Option<FrameSnapshot> {
        self.process_commands();

        if self.phase == SessionPhase::Complete {
            return None;
        }

        let (camera, draw) = self.run_systems();
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        let ctx = FrameContext {
            time: self.time,
            phase: self.phase,
            level_index: self.level_index,
            level_name: &self.level_name,
            health: self.health,
        };
        Some(systems::snapshot::build_snapshot(
            &self.world,
            &ctx,
            camera,
            events,
            draw,
        ))
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Player lives remaining.
    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn descriptor(&self) -> &LevelDescriptor {
        &self.descriptor
    }

    pub fn player_body(&self) -> Option<Aabb> {
        queries::player_body(&self.world)
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for staging test scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Override the life counter (for tests).
    #[cfg(test)]
    pub fn set_health(&mut self, health: u8) {
        self.health = health;
    }

    /// Spawn a projectile directly (for tests).
    #[cfg(test)]
    pub fn spawn_test_projectile(&mut self, body: Aabb, velocity: glam::Vec2) -> hecs::Entity {
        let seq = self.next_projectile_seq;
        self.next_projectile_seq += 1;
        world_setup::spawn_projectile(&mut self.world, seq, body, velocity)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single session command.
    fn handle_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::KeyDown { code } => {
                if self.phase == SessionPhase::Running {
                    self.input.apply_key(&code, true);
                }
            }
            SessionCommand::KeyUp { code } => {
                if self.phase == SessionPhase::Running {
                    self.input.apply_key(&code, false);
                }
            }
            SessionCommand::Resize { width, height } => {
                self.viewport = Viewport::new(width, height);
                self.rebuild_keep_health();
            }
            SessionCommand::SelectLevel { index } => {
                self.level_index = index;
                self.rebuild();
            }
            SessionCommand::LoadDescriptor { descriptor } => {
                self.descriptor = descriptor;
                self.level_index = 0;
                self.rebuild();
            }
            SessionCommand::Restart => {
                self.rebuild();
            }
        }
    }

    /// Build the active level from scratch with full health.
    fn rebuild(&mut self) {
        self.health = MAX_HEALTH;
        self.events.clear();
        self.rebuild_keep_health();
    }

    /// Discard all entity state and build the active level from scratch.
    /// Only the life counter and this frame's events survive.
    fn rebuild_keep_health(&mut self) {
        if self.level_index >= self.descriptor.levels.len() {
            warn!(
                level_index = self.level_index,
                levels = self.descriptor.levels.len(),
                "level index out of range, building an empty level"
            );
        }

        let setup = world_setup::setup_level(
            &mut self.world,
            &mut self.rng,
            &self.descriptor,
            self.level_index,
        );
        info!(
            level_index = self.level_index,
            name = %setup.name,
            enemies = setup.enemy_count,
            "level built"
        );

        self.level_name = setup.name;
        self.theme = setup.theme;
        self.time = SimTime::default();
        self.phase = SessionPhase::Running;
        self.input.clear();
        self.next_projectile_seq = 0;
        self.despawn_buffer.clear();
    }

    /// Run all systems in order and return the frame's camera and draw list.
    fn run_systems(&mut self) -> (Camera, Vec<DrawCommand>) {
        // 1. Player physics
        systems::player_physics::run(&mut self.world, &self.input);
        // 2. Stomps (before enemies move)
        systems::stomp::run(&mut self.world, &mut self.events);
        // 3. Enemy patrol + firing
        systems::enemy_behavior::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_projectile_seq,
            &mut self.events,
        );
        // 4. Projectiles (move, expire, hit). A hit restarts the level;
        //    the reduced life counter carries over.
        let hits = systems::projectiles::run(
            &mut self.world,
            &mut self.health,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        if hits > 0 {
            debug!(hits, health = self.health, "player hit, restarting level");
            self.rebuild_keep_health();
        }
        // 5. Camera
        let player = queries::player_body(&self.world).unwrap_or_default();
        let camera = systems::camera::compute(&player, self.viewport);
        // 6. Level exit
        let complete = systems::goal::reached_flagpole(&self.world);
        if complete {
            self.phase = SessionPhase::Complete;
            info!(level_index = self.level_index, "level complete");
            self.events.push(GameEvent::LevelComplete {
                level_index: self.level_index,
            });
        }
        // 7. Draw list
        let draw = systems::render::draw_frame(
            &self.world,
            &RenderInputs {
                camera,
                viewport: self.viewport,
                theme: &self.theme,
                health: self.health,
                complete,
            },
        );
        (camera, draw)
    }
}
