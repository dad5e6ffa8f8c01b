use serde::{Deserialize, Serialize};

use crate::domain::points::Points;

/// Сколько игроков в Хэнде.
pub const HAND_PLAYER_COUNT: usize = 4;

/// Имена игроков по умолчанию.
pub const DEFAULT_PLAYER_NAMES: [&str; HAND_PLAYER_COUNT] =
    ["Player 1", "Player 2", "Player 3", "Player 4"];

/// Индекс игрока за столом Хэнда (0..4).
pub type PlayerIndex = usize;

/// Игрок в Хэнде – каждый сам за себя.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: Points,
}

impl Player {
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

    /// Четыре игрока с именами по умолчанию и нулевым счётом.
    pub fn default_table() -> Vec<Player> {
        DEFAULT_PLAYER_NAMES.iter().map(|n| Player::new(*n)).collect()
    }
}
