//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for
//! read-only). They do not own state; all state lives in components or
//! in the engine.

pub mod cleanup;
pub mod combat;
pub mod enemy;
pub mod movement;
pub mod snapshot;
pub mod spawner;
