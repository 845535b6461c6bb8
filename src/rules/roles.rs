//! Role distribution and dealing.
//!
//! The number of each role is a pure function of the roster size. Dealing
//! shuffles the roster once and hands out roles in `Role::DEAL_ORDER`,
//! prefix by prefix; the remaining tail are villagers. The shuffle is the
//! only source of randomness.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GameState, PlayerId, Role, Roster, Shuffle};
use crate::error::GameError;

/// How many of each role a game of a given size gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDistribution {
    pub werewolf: usize,
    pub seer: usize,
    pub guard: usize,
    pub medium: usize,
    pub accomplice: usize,
    pub villager: usize,
}

impl RoleDistribution {
    /// Distribution for `players` seats.
    ///
    /// ```
    /// use werewolf_engine::rules::RoleDistribution;
    ///
    /// let d = RoleDistribution::for_players(10);
    /// assert_eq!((d.werewolf, d.seer, d.guard, d.medium, d.accomplice), (2, 1, 1, 1, 1));
    /// assert_eq!(d.villager, 4);
    /// ```
    #[must_use]
    pub fn for_players(players: usize) -> Self {
        let werewolf = (players / 4).max(1);
        let seer = 1;
        let guard = usize::from(players >= 6);
        let medium = usize::from(players >= 8);
        let accomplice = usize::from(players >= 10);
        let villager = players.saturating_sub(werewolf + seer + guard + medium + accomplice);

        Self {
            werewolf,
            seer,
            guard,
            medium,
            accomplice,
            villager,
        }
    }

    /// Count for one role.
    #[must_use]
    pub const fn count(&self, role: Role) -> usize {
        match role {
            Role::Werewolf => self.werewolf,
            Role::Seer => self.seer,
            Role::Guard => self.guard,
            Role::Medium => self.medium,
            Role::Accomplice => self.accomplice,
            Role::Villager => self.villager,
        }
    }

    /// Total seats covered.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.werewolf + self.seer + self.guard + self.medium + self.accomplice + self.villager
    }

    /// Seats on the werewolf side.
    #[must_use]
    pub const fn werewolf_faction(&self) -> usize {
        self.werewolf + self.accomplice
    }

    /// Roles in dealing order, one entry per seat.
    pub fn deal_sequence(self) -> impl Iterator<Item = Role> {
        Role::DEAL_ORDER
            .into_iter()
            .flat_map(move |role| std::iter::repeat(role).take(self.count(role)))
            .chain(std::iter::repeat(Role::Villager).take(self.villager))
    }
}

impl GameState {
    /// Deal a role to every seated player using `shuffler` for the seat
    /// permutation, then enter the first night.
    ///
    /// Only while recruiting with at least four players seated; once dealt
    /// the game has left Waiting, so roles are never dealt twice.
    pub fn assign_roles<S: Shuffle>(&mut self, shuffler: &mut S) -> Result<RoleDistribution, GameError> {
        self.ensure_startable()?;
        let distribution = deal(&mut self.roster, shuffler);
        self.enter_first_night();
        Ok(distribution)
    }

    /// Deal roles with the game's own RNG.
    pub(crate) fn assign_roles_seeded(&mut self) -> Result<RoleDistribution, GameError> {
        self.ensure_startable()?;
        let distribution = deal(&mut self.roster, &mut self.rng);
        self.enter_first_night();
        Ok(distribution)
    }
}

fn deal<S: Shuffle>(roster: &mut Roster, shuffler: &mut S) -> RoleDistribution {
    let distribution = RoleDistribution::for_players(roster.len());
    let mut seats: Vec<PlayerId> = roster.ids().collect();
    shuffler.shuffle(&mut seats);

    for (id, role) in seats.into_iter().zip(distribution.deal_sequence()) {
        if let Some(player) = roster.get_mut(id) {
            player.role = Some(role);
        }
    }

    info!(
        players = distribution.total(),
        werewolves = distribution.werewolf,
        "roles assigned"
    );
    distribution
}
