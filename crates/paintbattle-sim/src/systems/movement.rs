//! Point-to-point steering.

use glam::DVec2;

use paintbattle_core::types::{ArenaBounds, Position};

/// Move `speed` pixels from `from` straight toward `to`, then clamp into the arena.
pub fn step_toward(
    from: Position,
    to: Position,
    speed: f64,
    radius: f64,
    arena: &ArenaBounds,
) -> Position {
    let origin: DVec2 = from.as_vec();
    let direction = (to.as_vec() - origin).normalize_or_zero();
    arena.clamp(origin + direction * speed, radius).into()
}
