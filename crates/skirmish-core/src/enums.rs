//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What kind of obstacle a ray struck first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitKind {
    /// Nothing within the valid interval.
    #[default]
    None,
    Player,
    Enemy,
    Building,
}

/// Top-level session phase. Presentation states (menus, loading screens)
/// belong to the embedding layer; the engine only distinguishes whether
/// the simulation is stepping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session started yet.
    #[default]
    Idle,
    /// Systems run every tick.
    Playing,
    /// The player died; systems are frozen until the next session.
    GameOver,
}
