//! Каталог игр: статический реестр `id -> GameConfig`.

use thiserror::Error;

use crate::domain::game::{GameConfig, PointRules, ScoringMode, WinCondition};
use crate::domain::points::Points;

/// Максимум раундов в Хэнде.
pub const HAND_MAX_ROUNDS: u32 = 8;

/// Порог победы в Балоте.
pub const BALOOT_TARGET_SCORE: i64 = 152;

static KOUT_POINT_VALUES: [u32; 5] = [5, 6, 7, 8, 9];

static GAMES: [GameConfig; 3] = [
    GameConfig {
        id: "kout",
        name: "Kout",
        description: "Classic Kout card game scoring",
        mode: ScoringMode::PointSelection {
            point_values: &KOUT_POINT_VALUES,
            rules: PointRules::KOUT,
        },
    },
    GameConfig {
        id: "baloot",
        name: "Baloot",
        description: "Baloot card game - first to 152 points wins",
        mode: ScoringMode::ManualInput {
            win_condition: WinCondition {
                target_score: Points(BALOOT_TARGET_SCORE),
            },
        },
    },
    GameConfig {
        id: "hand",
        name: "Hand",
        description: "Saudi Hand card game - lowest score wins",
        mode: ScoringMode::Hand {
            max_rounds: HAND_MAX_ROUNDS,
        },
    },
];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Игра `{0}` не найдена в каталоге")]
    UnknownGame(String),
}

/// Найти конфигурацию игры по id.
pub fn get_game_config(id: &str) -> Result<&'static GameConfig, CatalogError> {
    GAMES
        .iter()
        .find(|g| g.id == id)
        .ok_or_else(|| CatalogError::UnknownGame(id.to_string()))
}

/// Все игры в порядке отображения.
pub fn all_games() -> &'static [GameConfig] {
    &GAMES
}
