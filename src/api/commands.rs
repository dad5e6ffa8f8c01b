use serde::{Deserialize, Serialize};

use crate::domain::{PlayerIndex, TeamSlot};
use crate::engine::{HandSelection, PointSelection};
use crate::infra::ids::UserId;

/// Команда верхнего уровня: всё, что меняет состояние.
///
/// Выбор пользователя (очки, команда, победитель руки) приходит
/// внутри команды целиком, как он был на экране в момент нажатия.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Операция над табло конкретной игры.
    Game(GameCommand),

    /// Вход / выход пользователя.
    Session(SessionCommand),
}

/// Чем закончилась заявка в Куте.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BidResult {
    /// Заказавшая команда взяла.
    Made,
    /// Не взяла: очки получает только соперник.
    Failed,
}

/// Команды над табло.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum GameCommand {
    /// Кут: применить выбранные очки.
    ApplyPoints(ApplyPointsCommand),

    /// Балот: добавить раунд из ручного ввода.
    AddRound(AddRoundCommand),

    /// Хэнд: записать закрытую руку.
    RecordHand(RecordHandCommand),

    RenameTeam(RenameTeamCommand),

    RenamePlayer(RenamePlayerCommand),

    /// Обнулить счёт, имена остаются.
    Reset(ResetGameCommand),

    /// Завершить игру: записать итог в историю и начать заново.
    Finish(FinishGameCommand),
}

impl GameCommand {
    /// Id игры, к которой относится команда.
    pub fn game_id(&self) -> &str {
        match self {
            GameCommand::ApplyPoints(c) => &c.game_id,
            GameCommand::AddRound(c) => &c.game_id,
            GameCommand::RecordHand(c) => &c.game_id,
            GameCommand::RenameTeam(c) => &c.game_id,
            GameCommand::RenamePlayer(c) => &c.game_id,
            GameCommand::Reset(c) => &c.game_id,
            GameCommand::Finish(c) => &c.game_id,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApplyPointsCommand {
    pub game_id: String,
    pub selection: PointSelection,
    pub result: BidResult,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddRoundCommand {
    pub game_id: String,
    /// Ввод как есть: пусто – 0.
    pub team1_input: String,
    pub team2_input: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordHandCommand {
    pub game_id: String,
    pub selection: HandSelection,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenameTeamCommand {
    pub game_id: String,
    pub team: TeamSlot,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenamePlayerCommand {
    pub game_id: String,
    pub player: PlayerIndex,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResetGameCommand {
    pub game_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FinishGameCommand {
    pub game_id: String,
}

/// Сессия пользователя. Без входа игра идёт как гостевая, без истории.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SessionCommand {
    SignIn { user_id: UserId },
    SignOut,
}
