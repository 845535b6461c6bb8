//! Session registry: independent games keyed by a collaborator-chosen key.
//!
//! The engine never looks games up itself. A chat adapter keeps one
//! registry (keyed by channel, for example) and serializes access to each
//! game, e.g. by wrapping the registry in a mutex or giving every session
//! its own task.

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use tracing::debug;

use crate::core::{GameConfig, GamePhase, GameState, PlayerId};
use crate::error::GameError;

/// Independent in-memory games.
#[derive(Debug)]
pub struct SessionRegistry<K> {
    games: FxHashMap<K, GameState>,
}

impl<K> Default for SessionRegistry<K> {
    fn default() -> Self {
        Self {
            games: FxHashMap::default(),
        }
    }
}

impl<K: Eq + Hash> SessionRegistry<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new game under `key`.
    ///
    /// Refused if a game already exists for the key or the config is invalid.
    pub fn create(
        &mut self,
        key: K,
        creator: PlayerId,
        config: GameConfig,
        seed: u64,
    ) -> Result<&mut GameState, GameError> {
        match self.games.entry(key) {
            Entry::Occupied(_) => Err(GameError::SessionExists),
            Entry::Vacant(slot) => {
                let game = GameState::new(creator, config, seed)?;
                Ok(slot.insert(game))
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&GameState> {
        self.games.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut GameState> {
        self.games.get_mut(key)
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.games.contains_key(key)
    }

    /// Drop a game, returning it.
    pub fn remove(&mut self, key: &K) -> Option<GameState> {
        self.games.remove(key)
    }

    /// Drop every finished game. Returns how many were removed.
    pub fn remove_finished(&mut self) -> usize {
        let before = self.games.len();
        self.games.retain(|_, game| game.phase() != GamePhase::Finished);
        let removed = before - self.games.len();
        debug!(removed, remaining = self.games.len(), "finished sessions removed");
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.games.keys()
    }
}
