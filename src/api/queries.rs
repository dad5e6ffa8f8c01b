use serde::{Deserialize, Serialize};

use crate::domain::GameConfig;
use crate::engine::Scoreboard;
use crate::infra::history::StoredGame;
use crate::infra::mapping::{map_game_to_dto, map_scoreboard_to_dto};

use super::dto::{GameSummaryDto, ScoreboardViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Состояние табло игры.
    GetScoreboard { game_id: String },

    /// Каталог игр.
    ListGames,

    /// История текущего пользователя; `None` – лимит из конфигурации.
    GetHistory { limit: Option<usize> },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Scoreboard(ScoreboardViewDto),
    Games(Vec<GameSummaryDto>),
    History(Vec<StoredGame>),
}

/// DTO табло для экрана игры.
pub fn build_scoreboard_view(config: &GameConfig, board: &Scoreboard) -> ScoreboardViewDto {
    map_scoreboard_to_dto(config, board)
}

/// DTO каталога в порядке отображения.
pub fn build_game_list(games: &[GameConfig]) -> Vec<GameSummaryDto> {
    games.iter().map(map_game_to_dto).collect()
}
