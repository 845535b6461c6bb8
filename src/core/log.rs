//! Append-only, timestamped record of what happened in a game.
//!
//! This is game history for the players (rendered by the collaborator), not
//! diagnostics; diagnostics go through `tracing`.

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

/// One line of game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the entry was recorded.
    pub at: DateTime<Utc>,

    /// Day counter at the time of the event.
    pub day: u32,

    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current time.
    #[must_use]
    pub fn now(day: u32, message: impl Into<String>) -> Self {
        Self {
            at: Utc::now(),
            day,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.at.format("%H:%M:%S"), self.message)
    }
}

/// History of a game.
///
/// Backed by `im::Vector` so snapshots handed to the collaborator are cheap.
#[derive(Clone, Debug, Default)]
pub struct ActionLog {
    entries: Vector<LogEntry>,
}

impl ActionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message for `day`.
    pub fn record(&mut self, day: u32, message: impl Into<String>) {
        self.entries.push_back(LogEntry::now(day, message));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Cheap copy of the history as it stands now.
    #[must_use]
    pub fn snapshot(&self) -> Vector<LogEntry> {
        self.entries.clone()
    }
}
