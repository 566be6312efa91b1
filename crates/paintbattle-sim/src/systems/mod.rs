//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state - unit state lives in components, bookkeeping in the engine.

pub mod agent;
pub mod census;
pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod snapshot;
pub mod targeting;
