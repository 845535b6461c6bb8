//! # werewolf-engine
//!
//! Rules engine for werewolf-style social deduction games.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No chat platform, UI, timers or transport. A
//!    collaborator calls in with player input and renders the structured
//!    results it gets back.
//!
//! 2. **Deterministic**: Role dealing is the only randomness and goes
//!    through a seeded RNG or any `Shuffle` the caller supplies. Everything
//!    else is a pure function of the submitted input.
//!
//! 3. **Rejections, Not Panics**: Invalid input returns a `GameError` and
//!    leaves the game untouched.
//!
//! ## Flow
//!
//! ```
//! use werewolf_engine::{GameConfig, GamePhase, GameState, PlayerId};
//!
//! let mut game = GameState::new(PlayerId::new(1), GameConfig::new(), 42).unwrap();
//! for id in 1..=6 {
//!     game.join(PlayerId::new(id)).unwrap();
//! }
//! game.start().unwrap();
//! assert_eq!(game.phase(), GamePhase::Night);
//!
//! // ... collect night actions, then:
//! let night = game.resolve_night().unwrap();
//! assert!(night.killed.is_none());
//! game.advance_phase().unwrap(); // Day
//! game.advance_phase().unwrap(); // Vote
//! let vote = game.resolve_vote().unwrap();
//! assert!(vote.eliminated().is_none());
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, roles, phases, configuration, RNG, the `GameState`
//!   aggregate with its lobby and submission operations
//! - `rules`: Role dealing, night and vote resolution, win condition,
//!   phase transitions
//! - `session`: Registry of independent games for the collaborator
//! - `error`: `GameError`

pub mod core;
pub mod rules;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerId, Roster,
    Role, Faction,
    GamePhase,
    GameConfig, WolfTieBreak, MIN_PLAYERS, MAX_PLAYERS_LIMIT,
    GameRng, Shuffle,
    ActionLog, LogEntry,
    GameState,
};

pub use crate::rules::{
    RoleDistribution,
    NightOutcome, Notification,
    VoteOutcome,
    GameOutcome, FactionCounts,
    PhaseChange,
};

pub use crate::session::SessionRegistry;
pub use crate::error::GameError;
