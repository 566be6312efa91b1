//! Simulation engine for PAINTBATTLE.
//!
//! Owns the hecs ECS world, advances the battle one tick at a time,
//! and produces BattleSnapshots for the frontend.

pub mod brush;
pub mod engine;
pub mod standings;
pub mod systems;
pub mod teams;
pub mod world_setup;

pub use engine::{BattleEngine, SimConfig};
pub use paintbattle_core as core;
