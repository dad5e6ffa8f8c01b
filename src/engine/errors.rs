use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{PlayerIndex, TeamSlot};

/// Ошибки движка подсчёта.
///
/// Любая ошибка означает, что состояние табло не изменилось.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum EngineError {
    #[error("Не выбраны очки")]
    PointsNotSelected,

    #[error("Не выбрана команда")]
    TeamNotSelected,

    #[error("Значение {0} не входит в набор очков этой игры")]
    InvalidPointValue(u32),

    #[error("Некорректное число для команды {}", .0.number())]
    InvalidRoundInput(TeamSlot),

    #[error("Нужно ввести очки хотя бы для одной команды")]
    EmptyRound,

    #[error("Не выбраны победитель и тип руки")]
    HandSelectionIncomplete,

    #[error("Игрока с индексом {0} нет за столом")]
    InvalidPlayerIndex(PlayerIndex),

    #[error("Игра уже завершена")]
    GameOver,

    #[error("Игра ещё не завершена")]
    GameNotFinished,

    #[error("Ничья – победителя нет")]
    NoWinner,

    #[error("Действие не поддерживается в режиме этой игры")]
    UnsupportedForMode,
}
