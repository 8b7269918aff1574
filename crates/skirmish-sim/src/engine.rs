//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, applies per-tick player
//! input, runs all systems, and hands the resulting events back to the
//! caller. The caller supplies `dt`, so the engine is agnostic to frame
//! pacing and fully deterministic for a given seed and input sequence.

use glam::Vec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Enemy, Life, Transform, Weapon};
use skirmish_core::enums::GamePhase;
use skirmish_core::events::GameEvent;
use skirmish_core::level::Level;
use skirmish_core::settings::{DirectorSettings, EnemySettings, PlayerSettings};
use skirmish_core::state::Snapshot;
use skirmish_core::types::SimTime;

use crate::systems;
use crate::systems::spawner::Director;
use crate::world_setup;

/// Configuration for a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same simulation.
    pub seed: u64,
    pub player: PlayerSettings,
    pub enemy: EnemySettings,
    pub director: DirectorSettings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            player: PlayerSettings::default(),
            enemy: EnemySettings::default(),
            director: DirectorSettings::default(),
        }
    }
}

/// Player intent for one tick, sampled by the embedding layer.
#[derive(Debug, Clone, Copy)]
pub struct PlayerInput {
    /// World-space displacement requested this tick (already scaled by
    /// the caller's frame time).
    pub movement: Vec3,
    /// View direction. A zero vector keeps the previous facing.
    pub facing: Vec3,
    /// Trigger held this tick.
    pub fire: bool,
}

impl Default for PlayerInput {
    fn default() -> Self {
        Self {
            movement: Vec3::ZERO,
            facing: Vec3::ZERO,
            fire: false,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    level: Level,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    config: SimConfig,
    player: Option<hecs::Entity>,
    director: Director,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine for the given level. No session is running until
    /// `start_session` is called.
    pub fn new(level: Level, config: SimConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let director = Director::new(config.director.clone());
        Self {
            world: World::new(),
            level,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            config,
            player: None,
            director,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Begin a fresh session: clear all entities, respawn the player from
    /// the settings template, and reset the clock and director.
    pub fn start_session(&mut self) {
        self.despawn_buffer.clear();
        self.despawn_buffer
            .extend(self.world.query::<&Enemy>().iter().map(|(entity, _)| entity));
        if let Some(player) = self.player.take() {
            self.despawn_buffer.push(player);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }

        self.player = Some(world_setup::spawn_player(&mut self.world, &self.config.player));
        self.director = Director::new(self.config.director.clone());
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.time = SimTime::default();
        self.phase = GamePhase::Playing;
        self.events.clear();
        log::info!("session started (seed {})", self.config.seed);
    }

    /// Advance the simulation by `dt` seconds and return the events the
    /// tick produced. Outside the `Playing` phase this is a no-op.
    pub fn tick(&mut self, input: &PlayerInput, dt: f32) -> Vec<GameEvent> {
        if self.phase == GamePhase::Playing {
            self.run_systems(input, dt);
            self.time.advance(dt);
        }
        std::mem::take(&mut self.events)
    }

    /// Build the visible state as of the most recent tick.
    pub fn snapshot(&self) -> Snapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            self.time,
            self.phase,
            self.time.elapsed_secs,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// The player entity, if a session has started.
    pub fn player(&self) -> Option<hecs::Entity> {
        self.player
    }

    /// Run all systems in order. `now` is the time at the start of the
    /// tick; `time.advance` happens after systems have run.
    fn run_systems(&mut self, input: &PlayerInput, dt: f32) {
        let now = self.time.elapsed_secs;

        // 1. Player view and movement.
        if let Some(player) = self.player {
            if let Some(facing) = input.facing.try_normalize() {
                if let Ok(mut transform) = self.world.get::<&mut Transform>(player) {
                    transform.facing = facing;
                }
            }
            if input.movement != Vec3::ZERO
                && !systems::movement::try_move(&mut self.world, &self.level, player, input.movement)
            {
                self.events.push(GameEvent::MoveBlocked);
            }
        }

        // 2. Player trigger.
        if input.fire {
            if let Some(player) = self.player {
                let fired = match self.world.get::<&mut Weapon>(player) {
                    Ok(mut weapon) => {
                        if systems::combat::can_shoot(&weapon, now) {
                            systems::combat::fire(&mut weapon, now);
                            Some(weapon.ammo)
                        } else {
                            None
                        }
                    }
                    Err(_) => None,
                };
                if let Some(ammo_left) = fired {
                    self.events.push(GameEvent::PlayerFired { ammo_left });
                }
            }
        }

        // 3. Enemy pursuit and trigger decisions.
        systems::enemy::run(&mut self.world, &self.level, now, dt, &mut self.events);

        // 4. Shot resolution and damage, player's ray first.
        systems::combat::run(&mut self.world, &self.level, now, dt);

        // 5. Spawning.
        systems::spawner::run(
            &mut self.world,
            &self.level,
            &mut self.director,
            &self.config.enemy,
            &mut self.rng,
            now,
            &mut self.events,
        );

        // 6. Reap dead enemies.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);

        // 7. Player death ends the session.
        if let Some(player) = self.player {
            let dead = self
                .world
                .get::<&Life>(player)
                .map_or(false, |life| life.current <= 0.0);
            if dead {
                self.phase = GamePhase::GameOver;
                self.events.push(GameEvent::PlayerDied);
                log::info!("player died at t = {:.2}", now);
            }
        }
    }
}
