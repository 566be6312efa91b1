//! Events emitted by the simulation for UI feedback (announcements, sounds).

use serde::{Deserialize, Serialize};

use crate::components::UnitId;
use crate::types::TeamColor;

/// Something noteworthy that happened since the previous snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleEvent {
    /// The battle began with this many teams.
    BattleStarted { teams: u32 },
    /// A unit took a killing blow.
    UnitKilled {
        unit: UnitId,
        color: TeamColor,
        killer: UnitId,
    },
    /// A team lost its last unit. `order` is 1 for the first team out.
    TeamEliminated { color: TeamColor, order: u32 },
    /// The battle is over. `winner` is `None` if nobody survived.
    BattleEnded { winner: Option<TeamColor> },
}
