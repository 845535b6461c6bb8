//! Day vote resolution.
//!
//! A single player with strictly the most votes is eliminated. A tie at the
//! top, or no votes at all, eliminates nobody. Votes are cleared afterwards
//! either way.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GamePhase, GameState, PlayerId, Role};
use crate::error::GameError;

/// Result of a vote round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteOutcome {
    /// Nobody voted.
    NoVotes,
    /// Several players tied for the most votes; nobody is eliminated.
    NoConsensus { tied: Vec<PlayerId>, votes: u32 },
    /// `player` was voted out. Their role is revealed to everyone.
    Eliminated { player: PlayerId, role: Option<Role>, votes: u32 },
}

impl VoteOutcome {
    /// The eliminated player, if any.
    #[must_use]
    pub fn eliminated(&self) -> Option<PlayerId> {
        match self {
            VoteOutcome::Eliminated { player, .. } => Some(*player),
            VoteOutcome::NoVotes | VoteOutcome::NoConsensus { .. } => None,
        }
    }
}

impl GameState {
    /// Tally the current round's votes and apply the result.
    ///
    /// Once per vote round: a second call is refused until the next round.
    pub fn resolve_vote(&mut self) -> Result<VoteOutcome, GameError> {
        self.ensure_phase(GamePhase::Vote)?;
        if self.vote_resolved {
            return Err(GameError::VoteAlreadyResolved(self.day));
        }

        let outcome = self.tally_votes();
        if let VoteOutcome::Eliminated { player, votes, .. } = &outcome {
            let player = *player;
            if let Some(p) = self.roster.get_mut(player) {
                p.is_alive = false;
            }
            self.last_eliminated = Some(player);
            self.last_eliminated_day = self.day;
            self.log.record(
                self.day,
                format!("{player} was eliminated by vote ({votes} votes)"),
            );
            info!(player = %player, day = self.day, votes, "player eliminated");
        } else {
            info!(day = self.day, outcome = ?outcome, "vote ended without elimination");
        }

        self.clear_votes();
        self.vote_resolved = true;
        Ok(outcome)
    }

    /// Count the current votes without applying them.
    #[must_use]
    pub fn vote_counts(&self) -> Vec<(PlayerId, u32)> {
        let mut counts: FxHashMap<PlayerId, u32> = FxHashMap::default();
        for &target in self.votes.values() {
            *counts.entry(target).or_insert(0) += 1;
        }

        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        counts
    }

    fn tally_votes(&self) -> VoteOutcome {
        let counts = self.vote_counts();
        let Some(&(_, max)) = counts.first() else {
            return VoteOutcome::NoVotes;
        };

        let tied: Vec<PlayerId> = counts
            .iter()
            .take_while(|&&(_, count)| count == max)
            .map(|&(id, _)| id)
            .collect();

        match tied.as_slice() {
            [player] => VoteOutcome::Eliminated {
                player: *player,
                role: self.roster.get(*player).and_then(|p| p.role),
                votes: max,
            },
            _ => VoteOutcome::NoConsensus { tied, votes: max },
        }
    }
}
