//! Final standings: the survivor first, then the eliminated teams, last one out first.

use std::collections::HashMap;

use paintbattle_core::state::StandingView;
use paintbattle_core::types::TeamColor;

use crate::teams::{EliminationOrder, TeamRegistry};

/// The sole surviving team, if exactly one is left.
pub fn winner(alive: &HashMap<TeamColor, u32>) -> Option<(&TeamColor, u32)> {
    if alive.len() != 1 {
        return None;
    }
    alive.iter().next().map(|(color, &count)| (color, count))
}

/// Rank every team once the battle is over.
///
/// With no survivor (everyone fell on the final tick) rank 1 stays vacant and
/// the eliminated teams are ranked from 2.
pub fn compute(
    teams: &TeamRegistry,
    elimination_order: &EliminationOrder,
    alive: &HashMap<TeamColor, u32>,
) -> Vec<StandingView> {
    let mut standings = Vec::with_capacity(teams.len());

    if let Some((color, survived)) = winner(alive) {
        standings.push(StandingView {
            rank: 1,
            color: color.clone(),
            initial_count: teams.initial_count(color),
            survived_count: survived,
        });
    }

    let mut rank = 2;
    for color in elimination_order.as_slice().iter().rev() {
        standings.push(StandingView {
            rank,
            color: color.clone(),
            initial_count: teams.initial_count(color),
            survived_count: 0,
        });
        rank += 1;
    }

    standings
}
