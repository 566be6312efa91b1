//! Team census: who is still standing, and who just fell.

use std::collections::HashMap;

use hecs::{Entity, World};
use log::info;

use paintbattle_core::components::Health;
use paintbattle_core::events::BattleEvent;
use paintbattle_core::types::TeamColor;

use crate::teams::{EliminationOrder, TeamRegistry};

/// Living units per color. Colors with no survivors are absent.
pub fn count_alive(world: &World, roster: &[Entity]) -> HashMap<TeamColor, u32> {
    let mut alive: HashMap<TeamColor, u32> = HashMap::new();
    for &entity in roster {
        let Ok(mut query) = world.query_one::<(&TeamColor, &Health)>(entity) else {
            continue;
        };
        if let Some((color, health)) = query.get() {
            if health.is_alive() {
                *alive.entry(color.clone()).or_default() += 1;
            }
        }
    }
    alive
}

/// Append every known team with no survivors to the elimination order.
///
/// Teams dying on the same tick are recorded in registry (first-spawn) order.
pub fn detect_eliminations(
    teams: &TeamRegistry,
    alive: &HashMap<TeamColor, u32>,
    elimination_order: &mut EliminationOrder,
    events: &mut Vec<BattleEvent>,
) {
    for entry in teams.iter() {
        if alive.contains_key(&entry.color) {
            continue;
        }
        if let Some(order) = elimination_order.record(&entry.color) {
            info!("Team {} eliminated (#{order} out)", entry.color);
            events.push(BattleEvent::TeamEliminated {
                color: entry.color.clone(),
                order,
            });
        }
    }
}
