//! Fundamental geometric and simulation types.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// 2D position on the arena plane (canvas pixels, origin top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Team identity. Any string the frontend uses as a paint color (usually `#RRGGBB`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamColor(pub String);

impl TeamColor {
    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamColor {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Rectangular arena. Units are kept `radius` away from every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub width: f64,
    pub height: f64,
}

impl Default for ArenaBounds {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl ArenaBounds {
    /// Clamp a point so a circle of `radius` centered on it stays inside the arena.
    pub fn clamp(&self, point: DVec2, radius: f64) -> DVec2 {
        // Not `f64::clamp`: that panics when the arena is narrower than the unit.
        DVec2::new(
            point.x.max(radius).min(self.width - radius),
            point.y.max(radius).min(self.height - radius),
        )
    }
}

/// Per-unit combat and movement parameters applied at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitStats {
    pub max_health: i32,
    pub radius: f64,
    /// Distance moved per tick.
    pub speed: f64,
    pub attack_range: f64,
    pub attack_damage: i32,
    /// Ticks between attacks.
    pub attack_speed: u32,
}

impl Default for UnitStats {
    fn default() -> Self {
        Self {
            max_health: UNIT_MAX_HEALTH,
            radius: UNIT_RADIUS,
            speed: UNIT_SPEED,
            attack_range: UNIT_ATTACK_RANGE,
            attack_damage: UNIT_ATTACK_DAMAGE,
            attack_speed: UNIT_ATTACK_SPEED,
        }
    }
}

/// Brush parameters used when painting armies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSettings {
    /// Brush diameter in pixels.
    pub size: f64,
    /// Units per brush sample; higher means denser armies.
    pub density: u32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_BRUSH_SIZE,
            density: DEFAULT_UNIT_DENSITY,
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of battle ticks run so far.
    pub tick: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
