//! Brush geometry: where painted units appear.
//!
//! Pointer capture happens in the frontend; these functions turn a dab or a
//! stroke segment into spawn positions. Every position gets a small jitter so
//! units painted on top of each other do not overlap exactly.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use paintbattle_core::constants::{SPAWN_JITTER, STROKE_SPACING};
use paintbattle_core::types::{BrushSettings, Position};

/// Spawn points for a single brush press at `center`.
///
/// `floor(size / 2 * density / 2)` units fanned out evenly by angle, each at a
/// random distance within the brush radius.
pub fn dab(rng: &mut ChaCha8Rng, center: Position, brush: &BrushSettings) -> Vec<Position> {
    let half = brush.size / 2.0;
    let count = (half * brush.density as f64 / 2.0).floor().max(0.0) as usize;

    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            let radius = rng.gen::<f64>() * half;
            let point = Position::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            );
            jitter(rng, point)
        })
        .collect()
}

/// Spawn points along a drag segment, endpoints included.
pub fn stroke(
    rng: &mut ChaCha8Rng,
    from: Position,
    to: Position,
    brush: &BrushSettings,
) -> Vec<Position> {
    let spacing = STROKE_SPACING / brush.density.max(1) as f64;
    let steps = ((from.distance_to(&to) / spacing).floor() as usize).max(1);

    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let point: DVec2 = from.as_vec().lerp(to.as_vec(), t);
            jitter(rng, point.into())
        })
        .collect()
}

fn jitter(rng: &mut ChaCha8Rng, point: Position) -> Position {
    Position::new(
        point.x + (rng.gen::<f64>() - 0.5) * SPAWN_JITTER,
        point.y + (rng.gen::<f64>() - 0.5) * SPAWN_JITTER,
    )
}
