//! Game rules: everything that turns submitted input into state changes.
//!
//! Each submodule extends `GameState` with one family of operations:
//! - `roles`: role distribution and dealing
//! - `night`: night-action resolution
//! - `voting`: day vote resolution
//! - `victory`: win-condition evaluation
//! - `flow`: start and phase transitions

pub mod roles;
pub mod night;
pub mod voting;
pub mod victory;
pub mod flow;

pub use roles::RoleDistribution;
pub use night::{NightOutcome, Notification};
pub use voting::VoteOutcome;
pub use victory::{FactionCounts, GameOutcome};
pub use flow::PhaseChange;
