//! Entity spawn factories.

use hecs::{Entity, World};

use paintbattle_core::components::*;
use paintbattle_core::types::{Position, TeamColor, UnitStats};

use crate::systems::targeting::Target;

/// Spawn one unit at full health, ready to attack, with no target.
pub fn spawn_unit(
    world: &mut World,
    stats: &UnitStats,
    id: UnitId,
    position: Position,
    color: TeamColor,
) -> Entity {
    world.spawn((
        Unit,
        id,
        position,
        color,
        Health::from(stats),
        Attack::from(stats),
        Mobility::from(stats),
        Target::default(),
    ))
}
