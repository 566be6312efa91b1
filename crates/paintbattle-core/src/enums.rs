//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level battle state.
///
/// `Drawing` → `Battle` → `Ended`. Only a full reset goes back to `Drawing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Armies are being painted. Spawning is allowed.
    #[default]
    Drawing,
    /// Units are fighting; every tick advances the simulation.
    Battle,
    /// At most one team is left; standings are final.
    Ended,
}
