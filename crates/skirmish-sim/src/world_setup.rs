//! Entity spawn factories.
//!
//! Builds component bundles from the settings templates so every enemy
//! is behaviorally identical at spawn time.

use glam::Vec3;
use hecs::{Entity, World};

use skirmish_core::components::{Body, Enemy, Life, Player, SpawnIndex, Targeting, Transform, Weapon};
use skirmish_core::settings::{EnemySettings, PlayerSettings};

/// Spawn the player entity from its settings template.
pub fn spawn_player(world: &mut World, settings: &PlayerSettings) -> Entity {
    world.spawn((
        Player,
        Transform {
            position: settings.spawn_position,
            facing: Vec3::NEG_Z,
        },
        Body {
            radius: settings.radius,
        },
        Life {
            current: settings.life,
            max: settings.life,
        },
        Weapon {
            ammo: settings.ammo,
            min_shot_spacing: settings.min_shot_spacing,
            shot_duration: settings.shot_duration,
            base_damage: settings.base_damage,
            range: settings.range,
            last_shot: None,
        },
    ))
}

/// Spawn one enemy from the shared template at the given position.
pub fn spawn_enemy(
    world: &mut World,
    settings: &EnemySettings,
    spawn_index: u64,
    position: Vec3,
    facing: Vec3,
) -> Entity {
    world.spawn((
        Enemy,
        SpawnIndex(spawn_index),
        Transform { position, facing },
        Body {
            radius: settings.radius,
        },
        Life {
            current: settings.life,
            max: settings.life,
        },
        Weapon {
            ammo: settings.ammo,
            min_shot_spacing: settings.min_shot_spacing,
            shot_duration: settings.shot_duration,
            base_damage: settings.base_damage,
            range: settings.range,
            last_shot: None,
        },
        Targeting {
            target_half_angle: settings.target_half_angle,
            move_speed: settings.move_speed,
        },
    ))
}
