use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::team::Team;

/// Итог завершённой игры для истории. Пишется один раз и больше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    /// Id игры из каталога ("kout", "baloot", "hand").
    pub game_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team1: Option<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team2: Option<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<Player>>,
    /// Имя победившей команды / игрока.
    pub winner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds: Option<u32>,
    /// Unix-время в миллисекундах.
    pub timestamp: i64,
}
