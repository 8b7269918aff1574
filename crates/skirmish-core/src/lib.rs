//! Core types and definitions for the skirmish simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry primitives, components, level data, settings templates, events,
//! and snapshot views. It has no dependency on any ECS or runtime framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod geom;
pub mod level;
pub mod settings;
pub mod state;
pub mod types;
