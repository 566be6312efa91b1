//! User-facing failures. The `Display` text is shown verbatim in the status line.

use thiserror::Error;

use crate::enums::BattlePhase;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("Draw some armies first!")]
    NoUnits,
    #[error("You need at least 2 different color teams to battle!")]
    NotEnoughTeams { teams: u32 },
    #[error("Not allowed during {actual:?} (needs {expected:?})")]
    WrongPhase {
        expected: BattlePhase,
        actual: BattlePhase,
    },
}
