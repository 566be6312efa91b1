//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Behavior lives in the simulation systems, not here.

use serde::{Deserialize, Serialize};

use crate::types::UnitStats;

/// Stable, engine-assigned identifier exposed to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u32);

/// Marks an entity as a combat unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Unit;

/// Hit points. A unit with `current <= 0` is dead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Remaining health in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.max <= 0 {
            return 0.0;
        }
        (self.current.max(0) as f64 / self.max as f64).min(1.0)
    }
}

/// Melee/short-range attack capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    pub range: f64,
    pub damage: i32,
    /// Cooldown reset value after an attack (ticks).
    pub attack_speed: u32,
    /// Ticks until the next attack is allowed. Zero means ready.
    pub cooldown: u32,
}

/// Movement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mobility {
    /// Distance per tick.
    pub speed: f64,
    /// Keeps the unit this far from the arena edges.
    pub radius: f64,
}

impl From<&UnitStats> for Health {
    fn from(stats: &UnitStats) -> Self {
        Health::full(stats.max_health)
    }
}

impl From<&UnitStats> for Attack {
    fn from(stats: &UnitStats) -> Self {
        Attack {
            range: stats.attack_range,
            damage: stats.attack_damage,
            attack_speed: stats.attack_speed,
            cooldown: 0,
        }
    }
}

impl From<&UnitStats> for Mobility {
    fn from(stats: &UnitStats) -> Self {
        Mobility {
            speed: stats.speed,
            radius: stats.radius,
        }
    }
}

// Position and TeamColor are defined in types.rs and also used as components.
