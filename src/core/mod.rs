//! Core engine types: players, roles, phases, configuration, RNG, state.
//!
//! This module holds the data model and the operations that only record
//! input (lobby changes, submissions). Everything that resolves a round
//! lives in `crate::rules`.

pub mod player;
pub mod role;
pub mod phase;
pub mod config;
pub mod rng;
pub mod log;
pub mod state;

pub use player::{Player, PlayerId, Roster};
pub use role::{Faction, Role};
pub use phase::GamePhase;
pub use config::{GameConfig, WolfTieBreak, MAX_PLAYERS_LIMIT, MIN_PLAYERS};
pub use rng::{GameRng, Shuffle};
pub use log::{ActionLog, LogEntry};
pub use state::GameState;
