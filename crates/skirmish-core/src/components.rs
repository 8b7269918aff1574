//! ECS components for simulated entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Marks the player entity (singleton).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Spawn order, assigned from a monotonic counter at spawn time.
/// Hit resolution evaluates enemies in this order so equal-distance
/// candidates break ties deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnIndex(pub u64);

/// World transform: position plus facing direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Direction the entity is looking along; shots travel this way.
    pub facing: Vec3,
}

/// Collision volume, approximated as a sphere.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub radius: f32,
}

/// Remaining life. Non-increasing except on explicit session reset;
/// reaching zero marks the entity dead and eligible for reaping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Life {
    pub current: f32,
    pub max: f32,
}

/// Weapon state for a combat-capable entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    /// Shots remaining, clamped at zero.
    pub ammo: u32,
    /// Minimum time between shots (seconds).
    pub min_shot_spacing: f32,
    /// How long a shot stays active after the trigger pull (seconds).
    pub shot_duration: f32,
    /// Total damage a full shot deals over its active window.
    pub base_damage: f32,
    /// Maximum distance a shot reaches (meters).
    pub range: f32,
    /// Time of the most recent shot; `None` before the first shot.
    pub last_shot: Option<f32>,
}

/// Enemy targeting parameters, copied from the settings template at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Targeting {
    /// Half-angle of the forward targeting cone (radians).
    pub target_half_angle: f32,
    /// Chase speed (meters per second).
    pub move_speed: f32,
}
