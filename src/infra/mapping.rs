use crate::api::dto::{GameSummaryDto, PlayerDto, ScoreboardViewDto, TeamDto};
use crate::domain::{GameConfig, HandType, ScoringMode, Team, TeamSlot};
use crate::engine::Scoreboard;
use crate::i18n::{translate, Language, MessageKey};

/// Маппинг конфигурации игры из каталога в DTO.
pub fn map_game_to_dto(config: &GameConfig) -> GameSummaryDto {
    let (target_score, max_rounds) = match config.mode {
        ScoringMode::PointSelection { .. } => (None, None),
        ScoringMode::ManualInput { win_condition } => (Some(win_condition.target_score), None),
        ScoringMode::Hand { max_rounds } => (None, Some(max_rounds)),
    };

    GameSummaryDto {
        game_id: config.id.to_string(),
        name: config.name.to_string(),
        description: config.description.to_string(),
        mode: config.mode_kind(),
        point_values: config.point_values().to_vec(),
        target_score,
        max_rounds,
    }
}

/// Название игры на языке пользователя; для неизвестного id – имя из каталога.
pub fn localized_game_name(language: Language, config: &GameConfig) -> String {
    MessageKey::for_game(config.id)
        .map(|key| translate(language, key).to_string())
        .unwrap_or_else(|| config.name.to_string())
}

pub fn localized_hand_type(language: Language, hand_type: HandType) -> &'static str {
    translate(language, MessageKey::for_hand_type(hand_type))
}

/// Маппинг `Scoreboard` -> `ScoreboardViewDto`.
pub fn map_scoreboard_to_dto(config: &GameConfig, board: &Scoreboard) -> ScoreboardViewDto {
    let mut view = ScoreboardViewDto {
        game_id: config.id.to_string(),
        name: config.name.to_string(),
        mode: config.mode_kind(),
        point_values: config.point_values().to_vec(),
        teams: Vec::new(),
        players: Vec::new(),
        team_rounds: Vec::new(),
        hand_rounds: Vec::new(),
        target_score: None,
        current_round: None,
        max_rounds: None,
        finished: board.is_finished(),
        winner: None,
        podium: Vec::new(),
    };

    match board {
        Scoreboard::PointSelection(engine) => {
            view.teams = map_teams(&engine.teams, engine.leader());
            view.team_rounds = engine.rounds().to_vec();
        }
        Scoreboard::ManualInput(engine) => {
            view.teams = map_teams(&engine.teams, engine.winner());
            view.team_rounds = engine.rounds().to_vec();
            view.target_score = Some(engine.target_score());
        }
        Scoreboard::Hand(engine) => {
            let standings = engine.standings();
            let leader = engine.leader();

            view.players = engine
                .players
                .iter()
                .enumerate()
                .map(|(index, player)| PlayerDto {
                    index,
                    name: player.name.clone(),
                    score: player.score,
                    place: standings
                        .iter()
                        .find(|s| s.player_index == index)
                        .map(|s| s.place)
                        .unwrap_or_default(),
                    leading: leader == Some(index),
                })
                .collect();
            view.hand_rounds = engine.rounds().to_vec();
            view.current_round = Some(engine.current_round());
            view.max_rounds = Some(engine.max_rounds());
            view.podium = engine.podium().unwrap_or_default();
        }
    }

    // Кут не заканчивается сам: победитель появляется только при завершении.
    if board.is_finished() {
        view.winner = board.winner_name().ok();
    }

    view
}

fn map_teams(teams: &[Team; 2], leading: Option<TeamSlot>) -> Vec<TeamDto> {
    TeamSlot::BOTH
        .into_iter()
        .map(|slot| {
            let team = &teams[slot.index()];
            TeamDto {
                slot,
                name: team.name.clone(),
                score: team.score,
                leading: leading == Some(slot),
            }
        })
        .collect()
}
