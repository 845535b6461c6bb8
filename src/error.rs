//! Validation rejections returned by the engine.
//!
//! Every fallible operation returns `Result<_, GameError>`. A rejected
//! operation never mutates the game: the caller surfaces the error to the
//! player and the game continues.

use thiserror::Error;

use crate::core::{GamePhase, PlayerId, Role};

/// Reasons an operation was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{0} is banned from this game")]
    Banned(PlayerId),

    #[error("{0} is not on the allow list")]
    NotAllowed(PlayerId),

    #[error("roster is full ({max} players)")]
    RosterFull { max: usize },

    #[error("{0} has already joined")]
    AlreadyJoined(PlayerId),

    #[error("not enough players: have {have}, need {need}")]
    NotEnoughPlayers { have: usize, need: usize },

    #[error("expected phase {expected:?}, game is in {actual:?}")]
    PhaseMismatch { expected: GamePhase, actual: GamePhase },

    #[error("game is finished")]
    GameFinished,

    #[error("{0} is not in this game")]
    UnknownPlayer(PlayerId),

    #[error("{0} is dead")]
    PlayerDead(PlayerId),

    #[error("{0} has not been dealt a role")]
    RoleNotAssigned(PlayerId),

    #[error("{player} ({role}) has no night action")]
    NoNightAction { player: PlayerId, role: Role },

    #[error("{0} cannot target themselves")]
    SelfTarget(PlayerId),

    #[error("{0} has already acted this night")]
    ActionAlreadyPerformed(PlayerId),

    #[error("{guard} protected {target} last night")]
    GuardRepeatTarget { guard: PlayerId, target: PlayerId },

    #[error("{0} has already voted")]
    AlreadyVoted(PlayerId),

    #[error("night {0} has already been resolved")]
    NightAlreadyResolved(u32),

    #[error("the day {0} vote has already been resolved")]
    VoteAlreadyResolved(u32),

    #[error("max players must be within {min}..={max} and cover the roster, got {requested}")]
    InvalidMaxPlayers { requested: usize, min: usize, max: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("a session with this key already exists")]
    SessionExists,
}
