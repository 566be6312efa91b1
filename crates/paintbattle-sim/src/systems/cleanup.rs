//! Cleanup system: prunes dead units from the world and the roster.

use hecs::{Entity, World};

use paintbattle_core::components::Health;

/// Remove every unit with health <= 0. Survivors keep their roster order.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, roster: &mut Vec<Entity>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    roster.retain(|&entity| {
        let alive = world
            .get::<&Health>(entity)
            .map(|health| health.is_alive())
            .unwrap_or(false);
        if !alive {
            despawn_buffer.push(entity);
        }
        alive
    });

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
