use serde::{Deserialize, Serialize};

use crate::domain::{
    GameConfig, GameResult, Player, PlayerIndex, ScoringMode, Team, TeamSlot, HAND_PLAYER_COUNT,
};
use crate::engine::errors::EngineError;
use crate::engine::hand_mode::HandEngine;
use crate::engine::manual_input::ManualInputEngine;
use crate::engine::point_selection::PointSelectionEngine;

/// Счёт, который переживает перезапуск: имена и очки, без раундов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PersistedScores {
    Teams { team1: Team, team2: Team },
    Players { players: Vec<Player> },
}

impl PersistedScores {
    /// Значения по умолчанию для режима игры.
    pub fn defaults_for(config: &GameConfig) -> Self {
        match config.mode {
            ScoringMode::Hand { .. } => PersistedScores::Players {
                players: Player::default_table(),
            },
            _ => PersistedScores::Teams {
                team1: Team::default_for(TeamSlot::First),
                team2: Team::default_for(TeamSlot::Second),
            },
        }
    }
}

/// Табло одной игры. Вариант определяется режимом из каталога.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scoreboard {
    PointSelection(PointSelectionEngine),
    ManualInput(ManualInputEngine),
    Hand(HandEngine),
}

impl Scoreboard {
    /// Новое табло с именами по умолчанию.
    pub fn new(config: &GameConfig) -> Self {
        Self::restore(config, PersistedScores::defaults_for(config))
    }

    /// Восстановить табло из сохранённого счёта.
    ///
    /// Если сохранённая форма не подходит режиму (игроки для командной
    /// игры, не четыре игрока для Хэнда), берутся значения по умолчанию.
    pub fn restore(config: &GameConfig, saved: PersistedScores) -> Self {
        match (config.mode, saved) {
            (ScoringMode::PointSelection { point_values, rules }, saved) => {
                let teams = teams_or_default(saved);
                Scoreboard::PointSelection(PointSelectionEngine::new(rules, point_values, teams))
            }
            (ScoringMode::ManualInput { win_condition }, saved) => {
                let teams = teams_or_default(saved);
                Scoreboard::ManualInput(ManualInputEngine::new(win_condition, teams))
            }
            (ScoringMode::Hand { max_rounds }, PersistedScores::Players { players })
                if players.len() == HAND_PLAYER_COUNT =>
            {
                Scoreboard::Hand(HandEngine::new(max_rounds, players))
            }
            (ScoringMode::Hand { max_rounds }, _) => {
                Scoreboard::Hand(HandEngine::new(max_rounds, Player::default_table()))
            }
        }
    }

    /// Снимок для сохранения.
    pub fn persisted(&self) -> PersistedScores {
        match self {
            Scoreboard::PointSelection(e) => teams_snapshot(&e.teams),
            Scoreboard::ManualInput(e) => teams_snapshot(&e.teams),
            Scoreboard::Hand(e) => PersistedScores::Players {
                players: e.players.clone(),
            },
        }
    }

    pub fn reset(&mut self) {
        match self {
            Scoreboard::PointSelection(e) => e.reset(),
            Scoreboard::ManualInput(e) => e.reset(),
            Scoreboard::Hand(e) => e.reset(),
        }
    }

    /// Количество записанных раундов с последнего сброса.
    pub fn round_count(&self) -> u32 {
        let n = match self {
            Scoreboard::PointSelection(e) => e.rounds().len(),
            Scoreboard::ManualInput(e) => e.rounds().len(),
            Scoreboard::Hand(e) => e.rounds().len(),
        };
        n as u32
    }

    /// Завершена ли игра по правилам режима. Кут завершается только вручную.
    pub fn is_finished(&self) -> bool {
        match self {
            Scoreboard::PointSelection(_) => false,
            Scoreboard::ManualInput(e) => e.is_won(),
            Scoreboard::Hand(e) => e.is_finished(),
        }
    }

    /// Переименовать команду (только командные режимы).
    pub fn rename_team(&mut self, slot: TeamSlot, name: impl Into<String>) -> Result<(), EngineError> {
        let teams = match self {
            Scoreboard::PointSelection(e) => &mut e.teams,
            Scoreboard::ManualInput(e) => &mut e.teams,
            Scoreboard::Hand(_) => return Err(EngineError::UnsupportedForMode),
        };
        teams[slot.index()].name = name.into();
        Ok(())
    }

    /// Переименовать игрока (только Хэнд).
    pub fn rename_player(&mut self, index: PlayerIndex, name: impl Into<String>) -> Result<(), EngineError> {
        match self {
            Scoreboard::Hand(e) => {
                let player = e
                    .players
                    .get_mut(index)
                    .ok_or(EngineError::InvalidPlayerIndex(index))?;
                player.name = name.into();
                Ok(())
            }
            _ => Err(EngineError::UnsupportedForMode),
        }
    }

    /// Имя победителя, если его можно определить сейчас.
    ///
    /// - Кут: команда с большим счётом (ничья – `NoWinner`);
    /// - Балот: команда, дошедшая до порога (иначе `GameNotFinished`);
    /// - Хэнд: игрок с минимальным счётом после последнего раунда.
    pub fn winner_name(&self) -> Result<String, EngineError> {
        match self {
            Scoreboard::PointSelection(e) => {
                let slot = e.leader().ok_or(EngineError::NoWinner)?;
                Ok(e.team(slot).name.clone())
            }
            Scoreboard::ManualInput(e) => {
                let slot = e.winner().ok_or(EngineError::GameNotFinished)?;
                Ok(e.team(slot).name.clone())
            }
            Scoreboard::Hand(e) => {
                if !e.is_finished() {
                    return Err(EngineError::GameNotFinished);
                }
                let index = e.leader().ok_or(EngineError::NoWinner)?;
                Ok(e.players[index].name.clone())
            }
        }
    }

    /// Итог игры для истории.
    pub fn to_game_result(&self, game_type: &str, timestamp: i64) -> Result<GameResult, EngineError> {
        let winner = self.winner_name()?;
        let rounds = Some(self.round_count());

        let result = match self.persisted() {
            PersistedScores::Teams { team1, team2 } => GameResult {
                game_type: game_type.to_string(),
                team1: Some(team1),
                team2: Some(team2),
                players: None,
                winner,
                rounds,
                timestamp,
            },
            PersistedScores::Players { players } => GameResult {
                game_type: game_type.to_string(),
                team1: None,
                team2: None,
                players: Some(players),
                winner,
                rounds,
                timestamp,
            },
        };

        Ok(result)
    }
}

fn teams_or_default(saved: PersistedScores) -> [Team; 2] {
    match saved {
        PersistedScores::Teams { team1, team2 } => [team1, team2],
        PersistedScores::Players { .. } => [
            Team::default_for(TeamSlot::First),
            Team::default_for(TeamSlot::Second),
        ],
    }
}

fn teams_snapshot(teams: &[Team; 2]) -> PersistedScores {
    PersistedScores::Teams {
        team1: teams[0].clone(),
        team2: teams[1].clone(),
    }
}
