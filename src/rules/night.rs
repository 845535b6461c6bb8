//! Night resolution.
//!
//! Submitted actions resolve in a fixed order:
//!
//! 1. Seers learn their target's role
//! 2. Guards protect their target (not the same player two nights running)
//! 3. Werewolves attack their agreed target unless it is protected
//! 4. Mediums learn the role of the player voted out the previous day
//! 5. Protection and per-night flags are cleared
//!
//! Actors who submitted nothing simply do nothing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{GamePhase, GameState, PlayerId, Role, WolfTieBreak};
use crate::error::GameError;

/// Result of one night action, for the collaborator to deliver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// Private to the seer.
    SeerReveal { seer: PlayerId, target: PlayerId, role: Role },
    /// Private to the guard.
    GuardProtect { guard: PlayerId, target: PlayerId },
    /// Public: `target` died in the night.
    Kill { target: PlayerId },
    /// The attack on `target` was blocked.
    Protected { target: PlayerId },
    /// Private to the medium.
    MediumReveal { medium: PlayerId, target: PlayerId, role: Role },
}

impl Notification {
    /// Short tag: `seer`, `guard`, `kill`, `protected` or `medium`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Notification::SeerReveal { .. } => "seer",
            Notification::GuardProtect { .. } => "guard",
            Notification::Kill { .. } => "kill",
            Notification::Protected { .. } => "protected",
            Notification::MediumReveal { .. } => "medium",
        }
    }

    /// Player who should receive this privately, if anyone.
    #[must_use]
    pub const fn recipient(&self) -> Option<PlayerId> {
        match self {
            Notification::SeerReveal { seer, .. } => Some(*seer),
            Notification::GuardProtect { guard, .. } => Some(*guard),
            Notification::MediumReveal { medium, .. } => Some(*medium),
            Notification::Kill { .. } | Notification::Protected { .. } => None,
        }
    }

    /// Player the notification is about.
    #[must_use]
    pub const fn target(&self) -> PlayerId {
        match self {
            Notification::SeerReveal { target, .. }
            | Notification::GuardProtect { target, .. }
            | Notification::Kill { target }
            | Notification::Protected { target }
            | Notification::MediumReveal { target, .. } => *target,
        }
    }
}

/// Everything a night produced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightOutcome {
    /// Player killed by the werewolves, if the attack landed.
    pub killed: Option<PlayerId>,

    /// Notifications in resolution order.
    pub notifications: SmallVec<[Notification; 4]>,
}

impl GameState {
    /// Resolve every action submitted this night.
    ///
    /// Once per night: a second call is refused until the next night begins.
    pub fn resolve_night(&mut self) -> Result<NightOutcome, GameError> {
        self.ensure_phase(GamePhase::Night)?;
        if self.night_resolved {
            return Err(GameError::NightAlreadyResolved(self.day));
        }
        let mut outcome = NightOutcome::default();

        self.resolve_seers(&mut outcome);
        self.resolve_guards(&mut outcome);
        self.resolve_werewolves(&mut outcome);
        self.resolve_mediums(&mut outcome);

        for p in self.roster.iter_mut() {
            p.is_protected = false;
        }
        self.clear_night_actions();
        self.night_resolved = true;

        info!(day = self.day, killed = ?outcome.killed, "night resolved");
        Ok(outcome)
    }

    fn resolve_seers(&mut self, outcome: &mut NightOutcome) {
        for seer in self.players_with_role(Role::Seer) {
            let Some(&target) = self.night_actions.get(&seer) else {
                continue;
            };
            let Some(role) = self.roster.get(target).and_then(|p| p.role) else {
                continue;
            };

            if let Some(p) = self.roster.get_mut(seer) {
                p.last_action_target = Some(target);
                p.last_action_day = self.day;
            }
            outcome.notifications.push(Notification::SeerReveal { seer, target, role });
        }
    }

    fn resolve_guards(&mut self, outcome: &mut NightOutcome) {
        let day = self.day;
        for guard in self.players_with_role(Role::Guard) {
            let Some(&target) = self.night_actions.get(&guard) else {
                continue;
            };
            let repeats = self
                .roster
                .get(guard)
                .is_some_and(|g| g.acted_on_previous_night(target, day));
            if repeats {
                debug!(guard = %guard, target = %target, day, "repeat protection skipped");
                continue;
            }

            let Some(protected) = self.roster.get_mut(target) else {
                continue;
            };
            protected.is_protected = true;
            if let Some(g) = self.roster.get_mut(guard) {
                g.last_action_target = Some(target);
                g.last_action_day = day;
            }
            outcome.notifications.push(Notification::GuardProtect { guard, target });
        }
    }

    fn resolve_werewolves(&mut self, outcome: &mut NightOutcome) {
        let mut tally: FxHashMap<PlayerId, u32> = FxHashMap::default();
        for wolf in self.players_with_role(Role::Werewolf) {
            if let Some(&target) = self.night_actions.get(&wolf) {
                *tally.entry(target).or_insert(0) += 1;
            }
        }

        let Some(target) = pick_attack_target(&tally, self.config.wolf_tie_break) else {
            if !tally.is_empty() {
                debug!(day = self.day, "werewolves split with no tie-break, no attack");
            }
            return;
        };
        let Some(victim) = self.roster.get_mut(target) else {
            return;
        };

        if victim.is_protected {
            debug!(target = %target, day = self.day, "attack blocked");
            outcome.notifications.push(Notification::Protected { target });
            return;
        }

        victim.is_alive = false;
        self.last_killed = Some(target);
        outcome.killed = Some(target);
        self.log.record(self.day, format!("{target} was killed during night {}", self.day));
        info!(player = %target, day = self.day, "player killed");
        outcome.notifications.push(Notification::Kill { target });
    }

    /// Mediums only hear about a player voted out on the day just before
    /// this night. An older elimination, or a tied vote since, reveals
    /// nothing.
    fn resolve_mediums(&mut self, outcome: &mut NightOutcome) {
        let Some(eliminated) = self.last_eliminated else {
            return;
        };
        if self.last_eliminated_day + 1 != self.day {
            return;
        }
        let Some(role) = self.roster.get(eliminated).and_then(|p| p.role) else {
            return;
        };

        for medium in self.players_with_role(Role::Medium) {
            outcome.notifications.push(Notification::MediumReveal {
                medium,
                target: eliminated,
                role,
            });
        }
    }
}

/// Strictly most-voted target; ties settled by `tie_break`.
fn pick_attack_target(tally: &FxHashMap<PlayerId, u32>, tie_break: WolfTieBreak) -> Option<PlayerId> {
    let max = tally.values().copied().max()?;
    let mut tied: Vec<PlayerId> = tally
        .iter()
        .filter(|&(_, &count)| count == max)
        .map(|(&id, _)| id)
        .collect();

    if tied.len() == 1 {
        return tied.pop();
    }
    match tie_break {
        WolfTieBreak::LowestPlayerId => tied.into_iter().min(),
        WolfTieBreak::NoKill => None,
    }
}
