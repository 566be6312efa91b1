//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::{Position, TeamColor};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Painting ---
    /// Spawn a single unit at an exact position.
    SpawnUnit { x: f64, y: f64, color: TeamColor },
    /// Brush press: spawn a cluster of units around a point.
    PaintDab { x: f64, y: f64, color: TeamColor },
    /// Brush drag: spawn a line of units between two pointer samples.
    PaintStroke {
        from: Position,
        to: Position,
        color: TeamColor,
    },
    /// Set the brush diameter in pixels.
    SetBrushSize { size: f64 },
    /// Set the unit density used by dabs and strokes.
    SetUnitDensity { density: u32 },
    /// Remove every painted unit and forget all teams.
    ClearArmies,

    // --- Battle control ---
    /// Start the battle with the currently painted armies.
    StartBattle,
    /// Throw away everything and return to drawing.
    Reset,
}
