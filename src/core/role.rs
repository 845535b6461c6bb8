//! Roles and factions.

use serde::{Deserialize, Serialize};

/// The two opposing victory groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Village,
    Werewolf,
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Village => write!(f, "Village"),
            Faction::Werewolf => write!(f, "Werewolves"),
        }
    }
}

/// Hidden role dealt to each player at game start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Werewolf,
    Villager,
    Guard,
    Seer,
    Medium,
    Accomplice,
}

impl Role {
    /// Special roles in dealing order. Seats left over become villagers.
    pub const DEAL_ORDER: [Role; 5] = [
        Role::Werewolf,
        Role::Seer,
        Role::Guard,
        Role::Medium,
        Role::Accomplice,
    ];

    /// Which side this role wins with.
    #[must_use]
    pub const fn faction(self) -> Faction {
        match self {
            Role::Werewolf | Role::Accomplice => Faction::Werewolf,
            Role::Villager | Role::Guard | Role::Seer | Role::Medium => Faction::Village,
        }
    }

    /// Whether the role submits a target during the night.
    ///
    /// The medium learns its result passively.
    #[must_use]
    pub const fn has_night_action(self) -> bool {
        match self {
            Role::Werewolf | Role::Seer | Role::Guard => true,
            Role::Villager | Role::Medium | Role::Accomplice => false,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Werewolf => "Werewolf",
            Role::Villager => "Villager",
            Role::Guard => "Guard",
            Role::Seer => "Seer",
            Role::Medium => "Medium",
            Role::Accomplice => "Accomplice",
        };
        f.write_str(name)
    }
}
