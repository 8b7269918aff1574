//! Simulation engine for the skirmish prototype.
//!
//! Owns the hecs ECS world, steps systems once per tick with an
//! externally supplied `dt`, and produces `Snapshot`s plus a per-tick
//! event stream for the presentation layer. Completely headless,
//! enabling deterministic testing.

pub mod engine;
pub mod hit;
pub mod systems;
pub mod world_setup;

pub use engine::{PlayerInput, SimConfig, SimulationEngine};
pub use skirmish_core as core;
