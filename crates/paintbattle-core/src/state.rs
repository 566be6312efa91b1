//! Battle state snapshot - the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::components::UnitId;
use crate::enums::BattlePhase;
use crate::events::BattleEvent;
use crate::types::{Position, SimTime, TeamColor};

/// Complete battle state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub time: SimTime,
    pub phase: BattlePhase,
    /// Status line text for the UI.
    pub message: String,
    pub status: BattleStatus,
    /// Alive units, in population order.
    pub units: Vec<UnitView>,
    /// Attacks landed during this tick (for attack-line effects).
    pub attacks: Vec<AttackView>,
    /// Every known team, in first-spawn order.
    pub teams: Vec<TeamView>,
    /// Colors in the order their last unit died.
    pub elimination_order: Vec<TeamColor>,
    /// Final scoreboard. Empty until the battle has ended.
    pub standings: Vec<StandingView>,
    pub events: Vec<BattleEvent>,
}

/// Counters for the status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleStatus {
    pub remaining_teams: u32,
    pub total_units: u32,
    pub eliminated_count: u32,
}

/// Renderable state of one alive unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub position: Position,
    pub color: TeamColor,
    pub radius: f64,
    pub health: i32,
    /// Remaining health in `0.0..=1.0`, for the health bar.
    pub health_fraction: f64,
    /// Health bars are only drawn for damaged units.
    pub damaged: bool,
}

/// A landed attack, drawn as a faint line from attacker to target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackView {
    pub attacker: UnitId,
    pub target: UnitId,
    pub from: Position,
    pub to: Position,
    pub color: TeamColor,
}

/// Per-team roster summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamView {
    pub color: TeamColor,
    /// Units ever spawned for this team.
    pub initial_count: u32,
    pub alive_count: u32,
    pub eliminated: bool,
}

/// One scoreboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingView {
    /// 1-based place.
    pub rank: u32,
    pub color: TeamColor,
    pub initial_count: u32,
    /// Units alive when the battle ended. Always 0 for eliminated teams.
    pub survived_count: u32,
}
