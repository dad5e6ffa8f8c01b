use serde::{Deserialize, Serialize};

use crate::domain::{
    GameResult, HandRound, PlayerIndex, Points, ScoringModeKind, TeamRound, TeamSlot,
};
use crate::engine::Standing;
use crate::infra::ids::DocumentId;

/// DTO игры из каталога (для экрана выбора).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummaryDto {
    pub game_id: String,
    pub name: String,
    pub description: String,
    pub mode: ScoringModeKind,
    /// Кнопки очков; пусто, если режим не выбор очков.
    pub point_values: Vec<u32>,
    pub target_score: Option<Points>,
    pub max_rounds: Option<u32>,
}

/// DTO команды на табло.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamDto {
    pub slot: TeamSlot,
    pub name: String,
    pub score: Points,
    /// Сейчас впереди (в Балоте – победитель).
    pub leading: bool,
}

/// DTO игрока Хэнда в порядке посадки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDto {
    pub index: PlayerIndex,
    pub name: String,
    pub score: Points,
    /// Место в таблице (1 – лидер).
    pub place: u32,
    pub leading: bool,
}

/// Полное состояние табло одной игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreboardViewDto {
    pub game_id: String,
    pub name: String,
    pub mode: ScoringModeKind,
    pub point_values: Vec<u32>,
    pub teams: Vec<TeamDto>,
    pub players: Vec<PlayerDto>,
    pub team_rounds: Vec<TeamRound>,
    pub hand_rounds: Vec<HandRound>,
    pub target_score: Option<Points>,
    /// Текущий раунд Хэнда (может быть max_rounds + 1 после конца).
    pub current_round: Option<u32>,
    pub max_rounds: Option<u32>,
    pub finished: bool,
    /// Победитель, если он уже определён правилами режима.
    pub winner: Option<String>,
    /// Первые три места – только в законченном Хэнде.
    pub podium: Vec<Standing>,
}

/// Итог завершения игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FinishedGameDto {
    pub result: GameResult,
    /// Id документа истории; `None` для гостя или при сбое хранилища.
    pub document_id: Option<DocumentId>,
    /// Предложить межстраничную рекламу.
    pub offer_interstitial: bool,
}

/// Ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Команда выполнена, табло нет (сессия).
    Ok,

    /// Новое состояние табло.
    Scoreboard(ScoreboardViewDto),

    PointsApplied {
        view: ScoreboardViewDto,
        round: TeamRound,
        awarded: Points,
        opponent_gain: Points,
    },

    RoundAdded {
        view: ScoreboardViewDto,
        round: TeamRound,
        winner: Option<String>,
    },

    HandRecorded {
        view: ScoreboardViewDto,
        round: HandRound,
        game_over: bool,
    },

    GameFinished {
        finished: FinishedGameDto,
        view: ScoreboardViewDto,
    },
}
