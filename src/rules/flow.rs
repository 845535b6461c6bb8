//! Phase state machine.
//!
//! ```text
//! Waiting --start--> Night --> Day --> Vote --> Night (day + 1) --> ...
//!                      \________\_______\_____ win --> Finished
//! ```
//!
//! Resolution is not automatic: the collaborator calls `resolve_night` or
//! `resolve_vote` before advancing out of those phases. Advancing without
//! resolving discards whatever was submitted. The win condition is
//! evaluated after every transition.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::roles::RoleDistribution;
use super::victory::GameOutcome;
use crate::core::{GamePhase, GameState, Shuffle};
use crate::error::GameError;

/// A completed phase transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseChange {
    pub from: GamePhase,
    /// `Finished` when the transition decided the game.
    pub to: GamePhase,
    pub day: u32,
    pub outcome: GameOutcome,
}

impl GameState {
    /// Deal roles with the game's RNG and enter the first night.
    pub fn start(&mut self) -> Result<RoleDistribution, GameError> {
        self.assign_roles_seeded()
    }

    /// Like `start`, with an explicit seat shuffler.
    pub fn start_with<S: Shuffle>(&mut self, shuffler: &mut S) -> Result<RoleDistribution, GameError> {
        self.assign_roles(shuffler)
    }

    /// Move to the next phase, finishing the game if a faction has won.
    pub fn advance_phase(&mut self) -> Result<PhaseChange, GameError> {
        let from = self.phase;
        let next = match from {
            GamePhase::Waiting => {
                return Err(GameError::PhaseMismatch {
                    expected: GamePhase::Night,
                    actual: GamePhase::Waiting,
                });
            }
            GamePhase::Finished => return Err(GameError::GameFinished),
            GamePhase::Night => {
                self.clear_night_actions();
                GamePhase::Day
            }
            GamePhase::Day => {
                self.begin_vote();
                GamePhase::Vote
            }
            GamePhase::Vote => {
                self.clear_votes();
                self.day += 1;
                self.begin_night();
                GamePhase::Night
            }
        };
        self.phase = next;
        info!(from = ?from, to = ?next, day = self.day, "phase changed");

        let outcome = self.check_winner();
        if outcome.is_over() {
            self.finish(outcome);
        }

        Ok(PhaseChange {
            from,
            to: self.phase,
            day: self.day,
            outcome,
        })
    }

    /// Recruiting, with at least `min_players` seated. The upper bound is
    /// enforced by `join` and `set_max_players`.
    pub(crate) fn ensure_startable(&self) -> Result<(), GameError> {
        self.ensure_phase(GamePhase::Waiting)?;
        let have = self.roster.len();
        if have < self.config.min_players {
            return Err(GameError::NotEnoughPlayers {
                have,
                need: self.config.min_players,
            });
        }
        Ok(())
    }

    pub(crate) fn enter_first_night(&mut self) {
        self.started_at = Some(Utc::now());
        self.day = 1;
        self.phase = GamePhase::Night;
        self.begin_night();
        self.begin_vote();
        self.log
            .record(self.day, format!("Game started with {} players", self.roster.len()));
        info!(players = self.roster.len(), "game started");
    }

    fn finish(&mut self, outcome: GameOutcome) {
        let Some(faction) = outcome.winner() else {
            return;
        };
        self.phase = GamePhase::Finished;
        self.winner = Some(faction);
        self.finished_at = Some(Utc::now());
        self.log.record(self.day, format!("{faction} win"));
        info!(winner = %faction, day = self.day, "game finished");
    }
}
