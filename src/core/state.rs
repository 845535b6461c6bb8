//! Game state: the aggregate root of one game.
//!
//! ## GameState
//!
//! Owns everything about a single game:
//! - Creator, settings, roster, ban and allow lists
//! - Phase and day counter
//! - Per-round scratch maps (`votes`, `night_actions`)
//! - Action log and the most recent kill/elimination
//! - RNG used to deal roles
//!
//! This module holds the lobby and submission operations. Resolution lives
//! in `crate::rules`, which extends `GameState` with the phase-advancing
//! operations.

use chrono::{DateTime, Utc};
use im::HashSet as ImHashSet;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::config::{GameConfig, MAX_PLAYERS_LIMIT, MIN_PLAYERS};
use super::log::ActionLog;
use super::phase::GamePhase;
use super::player::{Player, PlayerId, Roster};
use super::rng::GameRng;
use super::role::{Faction, Role};
use crate::error::GameError;

/// Full state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) creator: PlayerId,
    pub(crate) config: GameConfig,
    pub(crate) roster: Roster,
    pub(crate) banned: ImHashSet<PlayerId>,
    /// Whitelist when non-empty.
    pub(crate) allowed: ImHashSet<PlayerId>,

    pub(crate) phase: GamePhase,
    /// Starts at 1, incremented when a vote round rolls over into night.
    pub(crate) day: u32,

    /// Voter -> target for the current vote round.
    pub(crate) votes: FxHashMap<PlayerId, PlayerId>,
    /// Actor -> target for the current night.
    pub(crate) night_actions: FxHashMap<PlayerId, PlayerId>,
    /// Set once the current night or vote round has been resolved.
    pub(crate) night_resolved: bool,
    pub(crate) vote_resolved: bool,

    pub(crate) log: ActionLog,
    pub(crate) last_eliminated: Option<PlayerId>,
    /// Day on which `last_eliminated` was voted out.
    pub(crate) last_eliminated_day: u32,
    pub(crate) last_killed: Option<PlayerId>,
    pub(crate) winner: Option<Faction>,

    pub(crate) created_at: DateTime<Utc>,
    pub(crate) started_at: Option<DateTime<Utc>>,
    pub(crate) finished_at: Option<DateTime<Utc>>,

    pub(crate) rng: GameRng,
}

impl GameState {
    /// Create a game in the Waiting phase.
    pub fn new(creator: PlayerId, config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(creator, config, GameRng::new(seed))
    }

    /// Create a game with an explicit RNG.
    pub fn with_rng(creator: PlayerId, config: GameConfig, rng: GameRng) -> Result<Self, GameError> {
        config.validate()?;
        info!(creator = %creator, seed = rng.seed(), "game created");

        Ok(Self {
            creator,
            config,
            roster: Roster::new(),
            banned: ImHashSet::new(),
            allowed: ImHashSet::new(),
            phase: GamePhase::Waiting,
            day: 1,
            votes: FxHashMap::default(),
            night_actions: FxHashMap::default(),
            night_resolved: false,
            vote_resolved: false,
            log: ActionLog::new(),
            last_eliminated: None,
            last_eliminated_day: 0,
            last_killed: None,
            winner: None,
            created_at: Utc::now(),
            started_at: None,
            finished_at: None,
            rng,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn creator(&self) -> PlayerId {
        self.creator
    }

    #[must_use]
    pub fn is_creator(&self, id: PlayerId) -> bool {
        self.creator == id
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.get(id)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Votes cast in the current round.
    #[must_use]
    pub fn votes(&self) -> &FxHashMap<PlayerId, PlayerId> {
        &self.votes
    }

    /// Night actions submitted in the current night.
    #[must_use]
    pub fn night_actions(&self) -> &FxHashMap<PlayerId, PlayerId> {
        &self.night_actions
    }

    #[must_use]
    pub fn action_log(&self) -> &ActionLog {
        &self.log
    }

    /// Most recent player eliminated by vote.
    #[must_use]
    pub fn last_eliminated(&self) -> Option<PlayerId> {
        self.last_eliminated
    }

    /// Most recent player killed at night.
    #[must_use]
    pub fn last_killed(&self) -> Option<PlayerId> {
        self.last_killed
    }

    /// Winning faction once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<Faction> {
        self.winner
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    #[must_use]
    pub fn is_banned(&self, id: PlayerId) -> bool {
        self.banned.contains(&id)
    }

    #[must_use]
    pub fn allow_list(&self) -> &ImHashSet<PlayerId> {
        &self.allowed
    }

    // === Queries ===

    /// Living players in join order.
    #[must_use]
    pub fn alive_players(&self) -> Vec<PlayerId> {
        self.roster.iter().filter(|p| p.is_alive).map(|p| p.id).collect()
    }

    /// Living players holding `role`, in join order.
    #[must_use]
    pub fn players_with_role(&self, role: Role) -> Vec<PlayerId> {
        self.roster
            .iter()
            .filter(|p| p.is_alive_with_role(role))
            .map(|p| p.id)
            .collect()
    }

    /// Living night actors who have not submitted this night.
    #[must_use]
    pub fn pending_night_actors(&self) -> Vec<PlayerId> {
        self.roster
            .iter()
            .filter(|p| p.is_alive && !p.action_performed)
            .filter(|p| p.role.is_some_and(Role::has_night_action))
            .map(|p| p.id)
            .collect()
    }

    /// Living players who have not voted this round.
    #[must_use]
    pub fn pending_voters(&self) -> Vec<PlayerId> {
        self.roster
            .iter()
            .filter(|p| p.is_alive && !p.vote_cast)
            .map(|p| p.id)
            .collect()
    }

    /// Roster size is within the configured bounds.
    #[must_use]
    pub fn is_ready_to_start(&self) -> bool {
        (self.config.min_players..=self.config.max_players).contains(&self.roster.len())
    }

    // === Lobby ===

    /// Eligibility gate for joining: ban list, allow list, capacity.
    ///
    /// Does not check the phase.
    pub fn can_player_join(&self, id: PlayerId) -> Result<(), GameError> {
        if self.banned.contains(&id) {
            return Err(GameError::Banned(id));
        }
        if !self.allowed.is_empty() && !self.allowed.contains(&id) {
            return Err(GameError::NotAllowed(id));
        }
        if self.roster.len() >= self.config.max_players {
            return Err(GameError::RosterFull {
                max: self.config.max_players,
            });
        }
        Ok(())
    }

    /// Seat a player while recruiting.
    pub fn join(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.ensure_phase(GamePhase::Waiting)?;
        if self.roster.contains(id) {
            return Err(GameError::AlreadyJoined(id));
        }
        self.can_player_join(id)?;

        self.roster.insert(id);
        info!(player = %id, seats = self.roster.len(), "player joined");
        Ok(())
    }

    /// Remove a player before the game starts and ban them from rejoining.
    pub fn kick(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.ensure_phase(GamePhase::Waiting)?;
        if self.roster.remove(id).is_none() {
            return Err(GameError::UnknownPlayer(id));
        }
        self.banned.insert(id);
        info!(player = %id, "player kicked");
        Ok(())
    }

    /// Ban a player. A seated player is removed while recruiting; once the
    /// game is underway the roster is fixed and only future joins are barred.
    pub fn ban(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.ensure_not_finished()?;
        self.banned.insert(id);
        if self.phase == GamePhase::Waiting && self.roster.remove(id).is_some() {
            info!(player = %id, "banned player removed from roster");
        }
        Ok(())
    }

    /// Lift a ban. Returns whether the player was banned.
    pub fn unban(&mut self, id: PlayerId) -> Result<bool, GameError> {
        self.ensure_not_finished()?;
        Ok(self.banned.remove(&id).is_some())
    }

    /// Add a player to the allow list.
    pub fn allow(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.ensure_not_finished()?;
        self.allowed.insert(id);
        Ok(())
    }

    /// Remove a player from the allow list. Returns whether they were on it.
    pub fn disallow(&mut self, id: PlayerId) -> Result<bool, GameError> {
        self.ensure_not_finished()?;
        Ok(self.allowed.remove(&id).is_some())
    }

    /// Change the capacity while recruiting.
    pub fn set_max_players(&mut self, max: usize) -> Result<(), GameError> {
        self.ensure_phase(GamePhase::Waiting)?;
        if !(MIN_PLAYERS..=MAX_PLAYERS_LIMIT).contains(&max) || max < self.roster.len() {
            return Err(GameError::InvalidMaxPlayers {
                requested: max,
                min: MIN_PLAYERS.max(self.roster.len()),
                max: MAX_PLAYERS_LIMIT,
            });
        }
        self.config.max_players = max;
        Ok(())
    }

    pub fn set_game_name(&mut self, name: impl Into<String>) -> Result<(), GameError> {
        self.ensure_not_finished()?;
        self.config.game_name = name.into();
        Ok(())
    }

    pub fn set_vote_time_minutes(&mut self, minutes: u32) -> Result<(), GameError> {
        self.ensure_phase(GamePhase::Waiting)?;
        if minutes == 0 {
            return Err(GameError::InvalidConfig(
                "vote_time_minutes must be positive".to_string(),
            ));
        }
        self.config.vote_time_minutes = minutes;
        Ok(())
    }

    // === Submissions ===

    /// Record a night action for `actor` against `target`.
    ///
    /// The guard repeat rule is checked here so the player gets immediate
    /// feedback; night resolution enforces it again.
    pub fn submit_night_action(&mut self, actor: PlayerId, target: PlayerId) -> Result<(), GameError> {
        self.ensure_phase(GamePhase::Night)?;
        if self.night_resolved {
            return Err(GameError::NightAlreadyResolved(self.day));
        }
        let acting = self.living(actor)?;
        let role = acting.role.ok_or(GameError::RoleNotAssigned(actor))?;
        if !role.has_night_action() {
            return Err(GameError::NoNightAction { player: actor, role });
        }
        if acting.action_performed {
            return Err(GameError::ActionAlreadyPerformed(actor));
        }
        if actor == target {
            return Err(GameError::SelfTarget(actor));
        }
        if role == Role::Guard && acting.acted_on_previous_night(target, self.day) {
            return Err(GameError::GuardRepeatTarget { guard: actor, target });
        }
        self.living(target)?;

        self.night_actions.insert(actor, target);
        if let Some(p) = self.roster.get_mut(actor) {
            p.action_performed = true;
        }
        debug!(actor = %actor, target = %target, role = %role, day = self.day, "night action submitted");
        Ok(())
    }

    /// Record `voter`'s vote against `target`.
    pub fn submit_vote(&mut self, voter: PlayerId, target: PlayerId) -> Result<(), GameError> {
        self.ensure_phase(GamePhase::Vote)?;
        if self.vote_resolved {
            return Err(GameError::VoteAlreadyResolved(self.day));
        }
        if self.living(voter)?.vote_cast {
            return Err(GameError::AlreadyVoted(voter));
        }
        self.living(target)?;

        self.votes.insert(voter, target);
        if let Some(p) = self.roster.get_mut(voter) {
            p.vote_cast = true;
        }
        debug!(voter = %voter, target = %target, day = self.day, "vote submitted");
        Ok(())
    }

    // === Round rollover ===

    /// Start a fresh night round: no stale actions or protection.
    pub fn begin_night(&mut self) {
        self.clear_night_actions();
        self.night_resolved = false;
        for p in self.roster.iter_mut() {
            p.is_protected = false;
        }
    }

    /// Start a fresh vote round.
    pub fn begin_vote(&mut self) {
        self.clear_votes();
        self.vote_resolved = false;
    }

    /// Drop all votes and `vote_cast` flags.
    pub fn clear_votes(&mut self) {
        self.votes.clear();
        for p in self.roster.iter_mut() {
            p.vote_cast = false;
        }
    }

    /// Drop all night actions and `action_performed` flags.
    pub fn clear_night_actions(&mut self) {
        self.night_actions.clear();
        for p in self.roster.iter_mut() {
            p.action_performed = false;
        }
    }

    // === Helpers ===

    pub(crate) fn ensure_not_finished(&self) -> Result<(), GameError> {
        if self.phase == GamePhase::Finished {
            return Err(GameError::GameFinished);
        }
        Ok(())
    }

    pub(crate) fn ensure_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        self.ensure_not_finished()?;
        if self.phase != expected {
            return Err(GameError::PhaseMismatch {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Look up a seated, living player.
    fn living(&self, id: PlayerId) -> Result<&Player, GameError> {
        let player = self.roster.get(id).ok_or(GameError::UnknownPlayer(id))?;
        if !player.is_alive {
            return Err(GameError::PlayerDead(id));
        }
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: u64) -> PlayerId {
        PlayerId::new(id)
    }

    fn lobby(seats: u64) -> GameState {
        let mut state = GameState::new(pid(100), GameConfig::new(), 42).unwrap();
        for id in 1..=seats {
            state.join(pid(id)).unwrap();
        }
        state
    }

    /// Put the game into `phase` with hand-picked roles, bypassing the deal.
    fn with_roles(roles: &[Role], phase: GamePhase) -> GameState {
        let mut state = lobby(roles.len() as u64);
        for (i, role) in roles.iter().enumerate() {
            state.roster.get_mut(pid(i as u64 + 1)).unwrap().role = Some(*role);
        }
        state.phase = phase;
        state
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(pid(9), GameConfig::new(), 42).unwrap();

        assert_eq!(state.phase(), GamePhase::Waiting);
        assert_eq!(state.day(), 1);
        assert!(state.is_creator(pid(9)));
        assert_eq!(state.player_count(), 0);
        assert!(state.started_at().is_none());
        assert!(state.winner().is_none());
    }

    #[test]
    fn test_new_game_rejects_bad_config() {
        let config = GameConfig::new().with_max_players(30);
        assert!(GameState::new(pid(1), config, 42).is_err());
    }

    #[test]
    fn test_join_and_duplicate() {
        let mut state = lobby(0);
        assert!(state.join(pid(1)).is_ok());
        assert_eq!(state.join(pid(1)), Err(GameError::AlreadyJoined(pid(1))));
        assert_eq!(state.player_count(), 1);
    }

    #[test]
    fn test_can_player_join_banned() {
        let mut state = lobby(0);
        state.ban(pid(5)).unwrap();

        assert_eq!(state.can_player_join(pid(5)), Err(GameError::Banned(pid(5))));
        assert_eq!(state.join(pid(5)), Err(GameError::Banned(pid(5))));

        assert!(state.unban(pid(5)).unwrap());
        assert!(state.can_player_join(pid(5)).is_ok());
    }

    #[test]
    fn test_can_player_join_allow_list() {
        let mut state = lobby(0);
        assert!(state.can_player_join(pid(7)).is_ok());

        state.allow(pid(1)).unwrap();
        assert!(state.can_player_join(pid(1)).is_ok());
        assert_eq!(state.can_player_join(pid(7)), Err(GameError::NotAllowed(pid(7))));

        assert!(state.disallow(pid(1)).unwrap());
        assert!(state.can_player_join(pid(7)).is_ok());
    }

    #[test]
    fn test_can_player_join_capacity() {
        let mut state = lobby(0);
        state.set_max_players(4).unwrap();
        for id in 1..=4 {
            state.join(pid(id)).unwrap();
        }

        assert_eq!(state.can_player_join(pid(5)), Err(GameError::RosterFull { max: 4 }));
        assert_eq!(state.player_count(), 4);
    }

    #[test]
    fn test_kick_removes_and_bans() {
        let mut state = lobby(3);

        state.kick(pid(2)).unwrap();

        assert!(state.player(pid(2)).is_none());
        assert!(state.is_banned(pid(2)));
        assert_eq!(state.join(pid(2)), Err(GameError::Banned(pid(2))));
        assert_eq!(state.kick(pid(2)), Err(GameError::UnknownPlayer(pid(2))));
    }

    #[test]
    fn test_kick_only_while_waiting() {
        let mut state = with_roles(&[Role::Werewolf, Role::Seer, Role::Villager, Role::Villager], GamePhase::Night);

        assert!(matches!(state.kick(pid(1)), Err(GameError::PhaseMismatch { .. })));
        assert_eq!(state.player_count(), 4);
    }

    #[test]
    fn test_ban_after_start_keeps_roster() {
        let mut state = with_roles(&[Role::Werewolf, Role::Seer, Role::Villager, Role::Villager], GamePhase::Day);

        state.ban(pid(3)).unwrap();

        assert!(state.is_banned(pid(3)));
        assert!(state.player(pid(3)).is_some());
    }

    #[test]
    fn test_set_max_players() {
        let mut state = lobby(5);

        assert!(state.set_max_players(3).is_err());
        assert!(state.set_max_players(21).is_err());
        assert!(state.set_max_players(4).is_err()); // below roster size
        assert!(state.set_max_players(5).is_ok());
        assert_eq!(state.config().max_players, 5);
    }

    #[test]
    fn test_settings() {
        let mut state = lobby(0);
        state.set_game_name("moonrise").unwrap();
        state.set_vote_time_minutes(2).unwrap();
        assert!(state.set_vote_time_minutes(0).is_err());

        assert_eq!(state.config().game_name, "moonrise");
        assert_eq!(state.config().vote_time_minutes, 2);
    }

    #[test]
    fn test_is_ready_to_start() {
        assert!(!lobby(3).is_ready_to_start());
        assert!(lobby(4).is_ready_to_start());
        assert!(lobby(20).is_ready_to_start());
    }

    #[test]
    fn test_alive_and_role_queries() {
        let mut state = with_roles(
            &[Role::Werewolf, Role::Seer, Role::Villager, Role::Werewolf],
            GamePhase::Day,
        );
        state.roster.get_mut(pid(4)).unwrap().is_alive = false;

        assert_eq!(state.alive_players(), vec![pid(1), pid(2), pid(3)]);
        assert_eq!(state.players_with_role(Role::Werewolf), vec![pid(1)]);
        assert!(state.players_with_role(Role::Guard).is_empty());
    }

    #[test]
    fn test_submit_night_action() {
        let mut state = with_roles(
            &[Role::Werewolf, Role::Seer, Role::Villager, Role::Villager],
            GamePhase::Night,
        );

        assert_eq!(state.pending_night_actors(), vec![pid(1), pid(2)]);

        state.submit_night_action(pid(1), pid(3)).unwrap();

        assert_eq!(state.night_actions().get(&pid(1)), Some(&pid(3)));
        assert!(state.player(pid(1)).unwrap().action_performed);
        assert_eq!(state.pending_night_actors(), vec![pid(2)]);
        assert_eq!(
            state.submit_night_action(pid(1), pid(4)),
            Err(GameError::ActionAlreadyPerformed(pid(1)))
        );
        assert_eq!(state.night_actions().get(&pid(1)), Some(&pid(3)));
    }

    #[test]
    fn test_submit_night_action_rejections() {
        let mut state = with_roles(
            &[Role::Werewolf, Role::Seer, Role::Villager, Role::Medium],
            GamePhase::Night,
        );
        state.roster.get_mut(pid(3)).unwrap().is_alive = false;

        assert_eq!(
            state.submit_night_action(pid(4), pid(1)),
            Err(GameError::NoNightAction { player: pid(4), role: Role::Medium })
        );
        assert_eq!(state.submit_night_action(pid(2), pid(2)), Err(GameError::SelfTarget(pid(2))));
        assert_eq!(state.submit_night_action(pid(1), pid(3)), Err(GameError::PlayerDead(pid(3))));
        assert_eq!(state.submit_night_action(pid(3), pid(1)), Err(GameError::PlayerDead(pid(3))));
        assert_eq!(state.submit_night_action(pid(1), pid(99)), Err(GameError::UnknownPlayer(pid(99))));
        assert!(state.night_actions().is_empty());
    }

    #[test]
    fn test_night_action_without_role() {
        let mut state = lobby(4);
        state.phase = GamePhase::Night;

        assert_eq!(
            state.submit_night_action(pid(1), pid(2)),
            Err(GameError::RoleNotAssigned(pid(1)))
        );
        assert!(state.night_actions().is_empty());
    }

    #[test]
    fn test_submissions_closed_after_resolution() {
        let mut state = with_roles(&[Role::Werewolf, Role::Seer, Role::Villager, Role::Villager], GamePhase::Night);
        state.night_resolved = true;
        assert_eq!(
            state.submit_night_action(pid(1), pid(3)),
            Err(GameError::NightAlreadyResolved(1))
        );

        state.begin_night();
        assert!(state.submit_night_action(pid(1), pid(3)).is_ok());

        state.phase = GamePhase::Vote;
        state.vote_resolved = true;
        assert_eq!(state.submit_vote(pid(2), pid(1)), Err(GameError::VoteAlreadyResolved(1)));

        state.begin_vote();
        assert!(state.submit_vote(pid(2), pid(1)).is_ok());
    }

    #[test]
    fn test_submit_night_action_wrong_phase() {
        let mut state = with_roles(&[Role::Werewolf, Role::Seer, Role::Villager, Role::Villager], GamePhase::Day);
        assert_eq!(
            state.submit_night_action(pid(1), pid(3)),
            Err(GameError::PhaseMismatch { expected: GamePhase::Night, actual: GamePhase::Day })
        );
    }

    #[test]
    fn test_guard_repeat_rejected_at_submission() {
        let mut state = with_roles(&[Role::Werewolf, Role::Guard, Role::Villager, Role::Villager], GamePhase::Night);
        state.day = 3;
        {
            let guard = state.roster.get_mut(pid(2)).unwrap();
            guard.last_action_target = Some(pid(3));
            guard.last_action_day = 2;
        }

        assert_eq!(
            state.submit_night_action(pid(2), pid(3)),
            Err(GameError::GuardRepeatTarget { guard: pid(2), target: pid(3) })
        );
        assert!(state.submit_night_action(pid(2), pid(4)).is_ok());
    }

    #[test]
    fn test_submit_vote() {
        let mut state = with_roles(&[Role::Werewolf, Role::Seer, Role::Villager, Role::Villager], GamePhase::Vote);

        state.submit_vote(pid(2), pid(1)).unwrap();

        assert_eq!(state.votes().get(&pid(2)), Some(&pid(1)));
        assert!(state.player(pid(2)).unwrap().vote_cast);
        assert_eq!(state.submit_vote(pid(2), pid(3)), Err(GameError::AlreadyVoted(pid(2))));
        assert_eq!(state.votes().get(&pid(2)), Some(&pid(1)));
        assert_eq!(state.pending_voters(), vec![pid(1), pid(3), pid(4)]);
    }

    #[test]
    fn test_submit_vote_rejections() {
        let mut state = with_roles(&[Role::Werewolf, Role::Seer, Role::Villager, Role::Villager], GamePhase::Vote);
        state.roster.get_mut(pid(4)).unwrap().is_alive = false;

        assert_eq!(state.submit_vote(pid(4), pid(1)), Err(GameError::PlayerDead(pid(4))));
        assert_eq!(state.submit_vote(pid(1), pid(4)), Err(GameError::PlayerDead(pid(4))));
        assert_eq!(state.submit_vote(pid(50), pid(1)), Err(GameError::UnknownPlayer(pid(50))));

        state.phase = GamePhase::Night;
        assert!(matches!(state.submit_vote(pid(1), pid(2)), Err(GameError::PhaseMismatch { .. })));
        assert!(state.votes().is_empty());
    }

    #[test]
    fn test_begin_rounds_clear_scratch_state() {
        let mut state = with_roles(&[Role::Werewolf, Role::Seer, Role::Villager, Role::Villager], GamePhase::Vote);
        state.submit_vote(pid(1), pid(2)).unwrap();

        state.begin_vote();
        assert!(state.votes().is_empty());
        assert!(state.roster().iter().all(|p| !p.vote_cast));

        state.phase = GamePhase::Night;
        state.submit_night_action(pid(1), pid(3)).unwrap();
        state.roster.get_mut(pid(3)).unwrap().is_protected = true;

        state.begin_night();
        assert!(state.night_actions().is_empty());
        assert!(state.roster().iter().all(|p| !p.action_performed && !p.is_protected));
    }

    #[test]
    fn test_finished_game_is_inert() {
        let mut state = lobby(4);
        state.phase = GamePhase::Finished;

        assert_eq!(state.join(pid(9)), Err(GameError::GameFinished));
        assert_eq!(state.ban(pid(1)), Err(GameError::GameFinished));
        assert_eq!(state.allow(pid(1)), Err(GameError::GameFinished));
        assert_eq!(state.submit_vote(pid(1), pid(2)), Err(GameError::GameFinished));
    }
}
