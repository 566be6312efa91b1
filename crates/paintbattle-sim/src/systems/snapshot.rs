//! Snapshot system: reads the ECS world and builds a complete BattleSnapshot.
//!
//! This system is read-only - it never modifies the world.

use std::collections::HashMap;

use hecs::{Entity, World};

use paintbattle_core::components::{Health, Mobility, UnitId};
use paintbattle_core::enums::BattlePhase;
use paintbattle_core::events::BattleEvent;
use paintbattle_core::state::*;
use paintbattle_core::types::{Position, SimTime, TeamColor};

use crate::teams::{EliminationOrder, TeamRegistry};

/// Everything the snapshot needs besides the world itself.
pub struct SnapshotInputs<'a> {
    pub time: SimTime,
    pub phase: BattlePhase,
    pub message: &'a str,
    pub status: BattleStatus,
    pub units: Vec<UnitView>,
    pub attacks: Vec<AttackView>,
    pub teams: &'a TeamRegistry,
    pub alive: &'a HashMap<TeamColor, u32>,
    pub elimination_order: &'a EliminationOrder,
    pub standings: &'a [StandingView],
    pub events: Vec<BattleEvent>,
}

/// Assemble the snapshot broadcast to the frontend.
pub fn build_snapshot(inputs: SnapshotInputs<'_>) -> BattleSnapshot {
    BattleSnapshot {
        time: inputs.time,
        phase: inputs.phase,
        message: inputs.message.to_owned(),
        status: inputs.status,
        units: inputs.units,
        attacks: inputs.attacks,
        teams: build_teams(inputs.teams, inputs.alive, inputs.elimination_order),
        elimination_order: inputs.elimination_order.as_slice().to_vec(),
        standings: inputs.standings.to_vec(),
        events: inputs.events,
    }
}

/// Renderable view of one unit, or `None` if it is dead or gone.
pub fn unit_view(world: &World, entity: Entity) -> Option<UnitView> {
    let mut query = world
        .query_one::<(&UnitId, &Position, &TeamColor, &Health, &Mobility)>(entity)
        .ok()?;
    let (id, position, color, health, mobility) = query.get()?;
    if !health.is_alive() {
        return None;
    }

    Some(UnitView {
        id: *id,
        position: *position,
        color: color.clone(),
        radius: mobility.radius,
        health: health.current,
        health_fraction: health.fraction(),
        damaged: health.current < health.max,
    })
}

/// Views of every living unit in roster order.
pub fn unit_views(world: &World, roster: &[Entity]) -> Vec<UnitView> {
    roster
        .iter()
        .filter_map(|&entity| unit_view(world, entity))
        .collect()
}

/// Build TeamView list in first-spawn order.
fn build_teams(
    teams: &TeamRegistry,
    alive: &HashMap<TeamColor, u32>,
    elimination_order: &EliminationOrder,
) -> Vec<TeamView> {
    teams
        .iter()
        .map(|entry| TeamView {
            color: entry.color.clone(),
            initial_count: entry.initial_count,
            alive_count: alive.get(&entry.color).copied().unwrap_or(0),
            eliminated: elimination_order.contains(&entry.color),
        })
        .collect()
}
