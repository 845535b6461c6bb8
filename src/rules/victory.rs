//! Win-condition evaluation.
//!
//! The village wins once no werewolf-faction player is alive. The werewolves
//! win as soon as they are at least as many as the living villagers; parity
//! is enough.

use serde::{Deserialize, Serialize};

use crate::core::{Faction, GamePhase, GameState};

/// Whether the game is decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Ongoing,
    VillageWin,
    WerewolfWin,
}

impl GameOutcome {
    /// The winning faction, if the game is decided.
    #[must_use]
    pub const fn winner(self) -> Option<Faction> {
        match self {
            GameOutcome::Ongoing => None,
            GameOutcome::VillageWin => Some(Faction::Village),
            GameOutcome::WerewolfWin => Some(Faction::Werewolf),
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

impl From<Faction> for GameOutcome {
    fn from(faction: Faction) -> Self {
        match faction {
            Faction::Village => GameOutcome::VillageWin,
            Faction::Werewolf => GameOutcome::WerewolfWin,
        }
    }
}

/// Living players per faction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FactionCounts {
    pub werewolf: usize,
    pub village: usize,
}

impl GameState {
    /// Count living players on each side. Players without a role are not
    /// counted.
    #[must_use]
    pub fn faction_counts(&self) -> FactionCounts {
        let mut counts = FactionCounts::default();
        for role in self.roster.iter().filter(|p| p.is_alive).filter_map(|p| p.role) {
            match role.faction() {
                Faction::Werewolf => counts.werewolf += 1,
                Faction::Village => counts.village += 1,
            }
        }
        counts
    }

    /// Evaluate the win condition.
    ///
    /// Pure query; callable in any phase. A game still recruiting is always
    /// ongoing, a finished game reports the recorded winner.
    #[must_use]
    pub fn check_winner(&self) -> GameOutcome {
        match self.phase {
            GamePhase::Waiting => return GameOutcome::Ongoing,
            GamePhase::Finished => {
                return self.winner.map_or(GameOutcome::Ongoing, GameOutcome::from);
            }
            GamePhase::Night | GamePhase::Day | GamePhase::Vote => {}
        }

        let counts = self.faction_counts();
        if counts.werewolf == 0 {
            GameOutcome::VillageWin
        } else if counts.werewolf >= counts.village {
            GameOutcome::WerewolfWin
        } else {
            GameOutcome::Ongoing
        }
    }
}
