use serde::{Deserialize, Serialize};

use crate::domain::{Player, PlayerIndex, Points};

/// Место игрока в таблице Хэнда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    /// 1 – лидер.
    pub place: u32,
    pub player_index: PlayerIndex,
    pub name: String,
    pub score: Points,
}

/// Таблица по возрастанию счёта (меньше – лучше).
///
/// Сортировка стабильная: при равном счёте раньше стоит тот,
/// кто раньше сидит за столом.
pub fn standings(players: &[Player]) -> Vec<Standing> {
    let mut order: Vec<PlayerIndex> = (0..players.len()).collect();
    order.sort_by_key(|&i| players[i].score);

    order
        .into_iter()
        .enumerate()
        .map(|(pos, i)| Standing {
            place: pos as u32 + 1,
            player_index: i,
            name: players[i].name.clone(),
            score: players[i].score,
        })
        .collect()
}

/// Текущий лидер – минимальный счёт.
pub fn leader(players: &[Player]) -> Option<PlayerIndex> {
    standings(players).first().map(|s| s.player_index)
}

/// Первые три места.
pub fn podium(players: &[Player]) -> Vec<Standing> {
    let mut table = standings(players);
    table.truncate(3);
    table
}
