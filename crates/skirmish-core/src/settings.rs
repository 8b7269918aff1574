//! Settings templates for entity creation.
//!
//! The player is reset from `PlayerSettings` on every session (re)entry,
//! and every enemy is stamped from the single `EnemySettings` template, so
//! all enemies are behaviorally identical at spawn time.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Template applied to the player at session start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSettings {
    pub radius: f32,
    pub life: f32,
    pub ammo: u32,
    pub min_shot_spacing: f32,
    pub shot_duration: f32,
    pub base_damage: f32,
    pub range: f32,
    /// World-space spawn position.
    pub spawn_position: Vec3,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            radius: PLAYER_RADIUS,
            life: PLAYER_MAX_LIFE,
            ammo: PLAYER_AMMO,
            min_shot_spacing: PLAYER_SHOT_SPACING,
            shot_duration: SHOT_DURATION,
            base_damage: SHOT_BASE_DAMAGE,
            range: ENEMY_FIRING_RANGE,
            spawn_position: Vec3::new(0.0, PLAYER_EYE_HEIGHT / 2.0, 0.0),
        }
    }
}

/// Template applied to every spawned enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySettings {
    pub radius: f32,
    pub life: f32,
    pub ammo: u32,
    pub min_shot_spacing: f32,
    pub shot_duration: f32,
    pub base_damage: f32,
    pub range: f32,
    pub target_half_angle: f32,
    pub move_speed: f32,
}

impl Default for EnemySettings {
    fn default() -> Self {
        Self {
            radius: ENEMY_RADIUS,
            life: ENEMY_MAX_LIFE,
            ammo: ENEMY_AMMO,
            min_shot_spacing: ENEMY_SHOT_SPACING,
            shot_duration: SHOT_DURATION,
            base_damage: SHOT_BASE_DAMAGE,
            range: ENEMY_FIRING_RANGE,
            target_half_angle: ENEMY_TARGET_HALF_ANGLE,
            move_speed: ENEMY_MOVE_SPEED,
        }
    }
}

/// Settings for the director, which controls when and where enemies spawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorSettings {
    /// Population cap: enemies alive at any one time.
    pub max_enemies: usize,
    /// Minimum time between spawns (seconds).
    pub spawn_interval: f32,
}

impl Default for DirectorSettings {
    fn default() -> Self {
        Self {
            max_enemies: MAX_ACTIVE_ENEMIES,
            spawn_interval: ENEMY_SPAWN_INTERVAL,
        }
    }
}
