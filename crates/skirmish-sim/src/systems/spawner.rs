//! The director: decides when and where enemies enter the world.
//!
//! Spawns are gated by a population cap and a minimum spacing, and
//! placement rejection-samples the level until a clear spot is found.
//! A tick with no clear spot simply spawns nothing; the director tries
//! again next tick.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{Body, Enemy, Player, Transform};
use skirmish_core::constants::SPAWN_PLACEMENT_ATTEMPTS;
use skirmish_core::events::GameEvent;
use skirmish_core::level::Level;
use skirmish_core::settings::{DirectorSettings, EnemySettings};

use crate::world_setup;

/// Spawn scheduling state, owned by the engine across ticks.
pub struct Director {
    pub settings: DirectorSettings,
    /// Time of the most recent spawn; `None` before the first.
    pub last_spawn: Option<f32>,
    /// Monotonic counter; never reused within a session.
    pub next_spawn_index: u64,
}

impl Director {
    pub fn new(settings: DirectorSettings) -> Self {
        Self {
            settings,
            last_spawn: None,
            next_spawn_index: 0,
        }
    }
}

/// Spawn at most one enemy this tick, if the cap and spacing allow.
pub fn run(
    world: &mut World,
    level: &Level,
    director: &mut Director,
    template: &EnemySettings,
    rng: &mut ChaCha8Rng,
    now: f32,
    events: &mut Vec<GameEvent>,
) {
    let active = world.query::<&Enemy>().iter().count();
    if active >= director.settings.max_enemies {
        return;
    }

    let interval = director.settings.spawn_interval;
    if !director.last_spawn.map_or(true, |t| now >= t + interval) {
        return;
    }

    let player_pos = world
        .query::<(&Transform, &Body)>()
        .with::<&Player>()
        .iter()
        .next()
        .map(|(_, (transform, body))| (transform.position, body.radius));

    let Some(position) = pick_spawn_position(level, template.radius, player_pos, rng) else {
        return;
    };

    let facing = player_pos
        .map(|(pos, _)| pos - position)
        .and_then(Vec3::try_normalize)
        .unwrap_or(Vec3::NEG_Z);

    let spawn_index = director.next_spawn_index;
    director.next_spawn_index += 1;
    director.last_spawn = Some(now);

    world_setup::spawn_enemy(world, template, spawn_index, position, facing);
    events.push(GameEvent::EnemySpawned { spawn_index });
    log::debug!("spawned enemy {spawn_index} at {position}");
}

/// Rejection-sample a ground position clear of buildings and the player.
fn pick_spawn_position(
    level: &Level,
    radius: f32,
    player: Option<(Vec3, f32)>,
    rng: &mut ChaCha8Rng,
) -> Option<Vec3> {
    let half_w = level.width / 2.0 - radius;
    let half_d = level.depth / 2.0 - radius;

    for _ in 0..SPAWN_PLACEMENT_ATTEMPTS {
        let candidate = Vec3::new(
            rng.gen_range(-half_w..half_w),
            radius,
            rng.gen_range(-half_d..half_d),
        );

        if level
            .buildings
            .iter()
            .any(|b| b.overlaps_sphere(candidate, radius))
        {
            continue;
        }

        if let Some((pos, player_radius)) = player {
            let clearance = radius + player_radius;
            if (candidate - pos).length_squared() < clearance * clearance {
                continue;
            }
        }

        return Some(candidate);
    }

    None
}
