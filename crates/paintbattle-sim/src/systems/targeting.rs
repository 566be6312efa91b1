//! Target acquisition: nearest living unit of another team.

use hecs::{Entity, World};

use paintbattle_core::components::Health;
use paintbattle_core::types::{Position, TeamColor};

/// A unit's current target. Only a handle into the world: it may point at a
/// unit that has since died or been despawned, and is revalidated before use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Target(pub Option<Entity>);

/// True if `entity` still exists and has health left.
pub fn is_valid_target(world: &World, entity: Entity) -> bool {
    world
        .get::<&Health>(entity)
        .map(|health| health.is_alive())
        .unwrap_or(false)
}

/// Scan `roster` in order for the closest living unit whose color differs from `color`.
///
/// Ties keep the first unit found at the minimal distance.
pub fn find_nearest_enemy(
    world: &World,
    roster: &[Entity],
    color: &TeamColor,
    from: &Position,
) -> Option<Entity> {
    let mut nearest = None;
    let mut min_dist = f64::INFINITY;

    for &candidate in roster {
        let Ok(mut query) = world.query_one::<(&TeamColor, &Health, &Position)>(candidate) else {
            continue;
        };
        let Some((team, health, position)) = query.get() else {
            continue;
        };
        if team == color || !health.is_alive() {
            continue;
        }

        let dist = from.distance_to(position);
        if dist < min_dist {
            min_dist = dist;
            nearest = Some(candidate);
        }
    }

    nearest
}
