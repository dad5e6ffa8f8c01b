use serde::{Deserialize, Serialize};

use crate::domain::points::Points;

/// Имена команд по умолчанию (если в хранилище пусто).
pub const DEFAULT_TEAM_NAMES: [&str; 2] = ["Team 1", "Team 2"];

/// Команда в играх на двоих (Кут, Балот).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub score: Points,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: Points::ZERO,
        }
    }

    pub fn with_score(name: impl Into<String>, score: Points) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Команда с именем по умолчанию для слота.
    pub fn default_for(slot: TeamSlot) -> Self {
        Self::new(DEFAULT_TEAM_NAMES[slot.index()])
    }
}

/// Какая из двух команд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TeamSlot {
    First,
    Second,
}

impl TeamSlot {
    pub const BOTH: [TeamSlot; 2] = [TeamSlot::First, TeamSlot::Second];

    /// Индекс в массиве `[Team; 2]`.
    pub fn index(self) -> usize {
        match self {
            TeamSlot::First => 0,
            TeamSlot::Second => 1,
        }
    }

    /// Номер команды для людей: 1 или 2.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(TeamSlot::First),
            2 => Some(TeamSlot::Second),
            _ => None,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            TeamSlot::First => TeamSlot::Second,
            TeamSlot::Second => TeamSlot::First,
        }
    }
}
