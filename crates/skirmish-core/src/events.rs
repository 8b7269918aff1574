//! Events emitted by the simulation for the presentation layer.
//!
//! Enemies are identified by their spawn index rather than by ECS entity
//! ids, so events stay meaningful after the entity is despawned.

use serde::{Deserialize, Serialize};

/// One tick's worth of things the presentation layer may want to react to
/// (sound effects, HUD flashes, render-handle release).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player pulled the trigger and a shot began.
    PlayerFired { ammo_left: u32 },
    /// An enemy opened fire.
    EnemyFired { spawn_index: u64 },
    /// A proposed player move was rejected by the collision gate.
    MoveBlocked,
    /// A new enemy entered the world.
    EnemySpawned { spawn_index: u64 },
    /// An enemy's life reached zero and it was reaped. The embedding layer
    /// should release any render handle it holds for this enemy.
    EnemyReaped { spawn_index: u64 },
    /// The player's life reached zero; the session is over.
    PlayerDied,
}
