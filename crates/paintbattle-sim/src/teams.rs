//! Team bookkeeping: the roster of known colors and the order they fell in.
//!
//! Stored in `BattleEngine`, NOT as ECS entities.

use paintbattle_core::types::TeamColor;

/// One known team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamEntry {
    pub color: TeamColor,
    /// Units ever spawned with this color.
    pub initial_count: u32,
}

/// Every color that has spawned at least one unit, in first-spawn order.
#[derive(Debug, Clone, Default)]
pub struct TeamRegistry {
    entries: Vec<TeamEntry>,
}

impl TeamRegistry {
    /// Count one more spawned unit for `color`, registering the team if new.
    pub fn register(&mut self, color: &TeamColor) {
        match self.entries.iter_mut().find(|e| &e.color == color) {
            Some(entry) => entry.initial_count += 1,
            None => self.entries.push(TeamEntry {
                color: color.clone(),
                initial_count: 1,
            }),
        }
    }

    pub fn get(&self, color: &TeamColor) -> Option<&TeamEntry> {
        self.entries.iter().find(|e| &e.color == color)
    }

    /// Initial roster size of `color`, or 0 if it never spawned.
    pub fn initial_count(&self, color: &TeamColor) -> u32 {
        self.get(color).map(|e| e.initial_count).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Append-only list of eliminated colors. A color appears at most once.
#[derive(Debug, Clone, Default)]
pub struct EliminationOrder {
    colors: Vec<TeamColor>,
}

impl EliminationOrder {
    /// Record `color` as eliminated. Returns its 1-based elimination number,
    /// or `None` if it was already recorded.
    pub fn record(&mut self, color: &TeamColor) -> Option<u32> {
        if self.contains(color) {
            return None;
        }
        self.colors.push(color.clone());
        Some(self.colors.len() as u32)
    }

    pub fn contains(&self, color: &TeamColor) -> bool {
        self.colors.contains(color)
    }

    /// Oldest elimination first.
    pub fn as_slice(&self) -> &[TeamColor] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
