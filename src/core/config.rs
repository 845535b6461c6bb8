//! Game configuration.
//!
//! The collaborator builds a `GameConfig` when a game is created and may
//! adjust the capacity and display settings while the game is recruiting.
//! The engine has no notion of deadlines: `vote_time_minutes` is carried
//! for the collaborator's timers only.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Smallest roster a game can start with.
pub const MIN_PLAYERS: usize = 4;

/// Largest capacity a game may be configured with.
pub const MAX_PLAYERS_LIMIT: usize = 20;

/// How werewolves settle a split vote for their night target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WolfTieBreak {
    /// Attack the tied target with the lowest player ID.
    #[default]
    LowestPlayerId,
    /// No agreement, no attack.
    NoKill,
}

/// Per-game settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Minimum roster size to start (always `MIN_PLAYERS`).
    pub min_players: usize,

    /// Capacity (`MIN_PLAYERS..=MAX_PLAYERS_LIMIT`).
    pub max_players: usize,

    /// Discussion/vote window length, for the collaborator's timers.
    pub vote_time_minutes: u32,

    /// Display name of the game.
    pub game_name: String,

    pub wolf_tie_break: WolfTieBreak,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS_LIMIT,
            vote_time_minutes: 5,
            game_name: String::new(),
            wolf_tie_break: WolfTieBreak::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    /// Set the vote window length.
    #[must_use]
    pub fn with_vote_time_minutes(mut self, minutes: u32) -> Self {
        self.vote_time_minutes = minutes;
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_game_name(mut self, name: impl Into<String>) -> Self {
        self.game_name = name.into();
        self
    }

    /// Set the werewolf tie-break policy.
    #[must_use]
    pub fn with_wolf_tie_break(mut self, tie_break: WolfTieBreak) -> Self {
        self.wolf_tie_break = tie_break;
        self
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_players != MIN_PLAYERS {
            return Err(GameError::InvalidConfig(format!(
                "min_players must be {MIN_PLAYERS}, got {}",
                self.min_players
            )));
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS_LIMIT).contains(&self.max_players) {
            return Err(GameError::InvalidMaxPlayers {
                requested: self.max_players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS_LIMIT,
            });
        }
        if self.vote_time_minutes == 0 {
            return Err(GameError::InvalidConfig(
                "vote_time_minutes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
