//! Player identification and per-game player records.
//!
//! ## PlayerId
//!
//! Opaque, comparable player identifier. The collaborator chooses the value
//! (a chat platform user ID, for example); the engine only compares it.
//!
//! ## Roster
//!
//! Join-ordered `PlayerId -> Player` map. Iteration order is join order,
//! lookups are O(1) through an index map.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::role::Role;

/// Opaque player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A seat in one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    /// Assigned once at game start.
    pub role: Option<Role>,

    pub is_alive: bool,

    /// Night-scoped; cleared at the end of every night resolution.
    pub is_protected: bool,

    /// Target and day of this player's last resolved night action.
    pub last_action_target: Option<PlayerId>,
    pub last_action_day: u32,

    /// Round-scoped submission flags.
    pub vote_cast: bool,
    pub action_performed: bool,
}

impl Player {
    /// Create a living player with no role yet.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            role: None,
            is_alive: true,
            is_protected: false,
            last_action_target: None,
            last_action_day: 0,
            vote_cast: false,
            action_performed: false,
        }
    }

    /// Check if the player is alive and holds `role`.
    #[must_use]
    pub fn is_alive_with_role(&self, role: Role) -> bool {
        self.is_alive && self.role == Some(role)
    }

    /// True if this player's last action on the night before `day` targeted
    /// `target`. Guards may not protect the same player two nights running.
    #[must_use]
    pub fn acted_on_previous_night(&self, target: PlayerId, day: u32) -> bool {
        self.last_action_target == Some(target) && self.last_action_day + 1 == day
    }
}

/// Join-ordered collection of players.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
    index: FxHashMap<PlayerId, usize>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.index.get(&id).map(|&i| &self.players[i])
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.index.get(&id).map(|&i| &mut self.players[i])
    }

    /// Append a player. Returns false if the ID is already seated.
    pub fn insert(&mut self, id: PlayerId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.index.insert(id, self.players.len());
        self.players.push(Player::new(id));
        true
    }

    /// Remove a player, preserving the join order of everyone else.
    pub fn remove(&mut self, id: PlayerId) -> Option<Player> {
        let pos = self.index.remove(&id)?;
        let player = self.players.remove(pos);
        for (i, p) in self.players.iter().enumerate().skip(pos) {
            self.index.insert(p.id, i);
        }
        Some(player)
    }

    /// Iterate players in join order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Player IDs in join order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|p| p.id)
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        &self.players[self.index[&id]]
    }
}
