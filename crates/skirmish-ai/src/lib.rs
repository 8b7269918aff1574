//! Enemy decision logic for the skirmish simulation.
//!
//! Pure functions over plain data — no ECS dependency — so targeting
//! behavior can be tested in isolation. Occlusion is deliberately not
//! handled here: line of sight needs world geometry and is checked last
//! by the simulation, after the cheap range and cone tests have passed.

pub mod targeting;
