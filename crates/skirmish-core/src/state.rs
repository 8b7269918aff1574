//! Snapshot views — the visible simulation state built after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::types::SimTime;

/// Complete visible state for the HUD/presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
}

/// Player state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub facing: Vec3,
    pub life: f32,
    pub ammo: u32,
}

/// One enemy's state for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub spawn_index: u64,
    pub position: Vec3,
    pub facing: Vec3,
    pub life: f32,
    /// Whether the enemy's shot window is currently active.
    pub firing: bool,
}
