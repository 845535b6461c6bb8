//! Game phases.

use serde::{Deserialize, Serialize};

/// Where the game is in its lifecycle.
///
/// `Waiting -> Night -> Day -> Vote -> Night ...` until a faction wins,
/// then `Finished`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Recruiting; roster and settings may change.
    #[default]
    Waiting,
    Night,
    Day,
    Vote,
    /// Inert; every mutation is rejected.
    Finished,
}

impl GamePhase {
    /// Night, Day or Vote.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, GamePhase::Night | GamePhase::Day | GamePhase::Vote)
    }
}
