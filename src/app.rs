//! Диспетчер приложения: команды и запросы поверх табло всех игр.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::api::{
    build_game_list, build_scoreboard_view, ApiError, BidResult, Command, CommandResponse,
    FinishedGameDto, GameCommand, Query, QueryResponse, ScoreboardViewDto, SessionCommand,
};
use crate::config::AppConfig;
use crate::domain::{all_games, get_game_config, GameConfig, GameId, PlayerIndex, TeamSlot};
use crate::engine::{
    EngineError, HandOutcome, HandSelection, PointOutcome, PointSelection, RoundOutcome, Scoreboard,
};
use crate::infra::ads::InterstitialCadence;
use crate::infra::clock::{Clock, SystemClock};
use crate::infra::history::{HistoryRecorder, HistoryStore, StoredGame, DEFAULT_HISTORY_LIMIT};
use crate::infra::ids::UserId;
use crate::infra::persistence::{KeyValueStore, ScoreStorage};

/// Приложение:
/// - держит табло открытых игр (загружаются из хранилища при первом обращении);
/// - после каждого успешного изменения сохраняет счёт;
/// - при завершении игры пишет итог в историю и считает игры для рекламы.
pub struct App<S, H> {
    storage: ScoreStorage<S>,
    history: HistoryRecorder<H>,
    clock: Box<dyn Clock>,
    ads: InterstitialCadence,
    history_limit: usize,
    boards: HashMap<GameId, Scoreboard>,
}

impl<S: KeyValueStore, H: HistoryStore> App<S, H> {
    pub fn new(store: S, history: H) -> Self {
        Self {
            storage: ScoreStorage::new(store),
            history: HistoryRecorder::new(history),
            clock: Box::new(SystemClock),
            ads: InterstitialCadence::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            boards: HashMap::new(),
        }
    }

    /// Приложение с настройками рекламы и истории из конфигурации.
    pub fn with_config(store: S, history: H, config: &AppConfig) -> Self {
        let mut app = Self::new(store, history);
        app.ads = InterstitialCadence::new(config.interstitial_every);
        app.history_limit = config.history_limit;
        app
    }

    /// Подменить часы (для тестов).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn storage(&self) -> &ScoreStorage<S> {
        &self.storage
    }

    pub fn ads(&self) -> &InterstitialCadence {
        &self.ads
    }

    pub fn current_user(&self) -> Option<&UserId> {
        self.history.current_user()
    }

    pub fn sign_in(&mut self, user: UserId) {
        self.history.sign_in(user);
    }

    pub fn sign_out(&mut self) {
        self.history.sign_out();
    }

    /// Табло игры (открывается из хранилища при первом обращении).
    pub fn scoreboard(&mut self, game_id: &str) -> Result<&Scoreboard, ApiError> {
        let config = get_game_config(game_id)?;
        Ok(self.board_entry(config))
    }

    pub fn view(&mut self, game_id: &str) -> Result<ScoreboardViewDto, ApiError> {
        let config = get_game_config(game_id)?;
        let board = self.board_entry(config);
        Ok(build_scoreboard_view(config, board))
    }

    /// Кут: применить выбор. Выбор очищается только при успехе.
    pub fn apply_points(
        &mut self,
        game_id: &str,
        selection: &mut PointSelection,
        result: BidResult,
    ) -> Result<PointOutcome, ApiError> {
        self.mutate(game_id, |board| match board {
            Scoreboard::PointSelection(engine) => match result {
                BidResult::Made => engine.apply_win(selection),
                BidResult::Failed => engine.apply_loss(selection),
            },
            _ => Err(EngineError::UnsupportedForMode),
        })
    }

    /// Балот: добавить раунд из ручного ввода.
    pub fn add_round(
        &mut self,
        game_id: &str,
        team1_input: &str,
        team2_input: &str,
    ) -> Result<RoundOutcome, ApiError> {
        self.mutate(game_id, |board| match board {
            Scoreboard::ManualInput(engine) => engine.add_round(team1_input, team2_input),
            _ => Err(EngineError::UnsupportedForMode),
        })
    }

    /// Хэнд: записать руку. Выбор очищается только при успехе.
    pub fn record_hand(
        &mut self,
        game_id: &str,
        selection: &mut HandSelection,
    ) -> Result<HandOutcome, ApiError> {
        self.mutate(game_id, |board| match board {
            Scoreboard::Hand(engine) => engine.record_hand(selection),
            _ => Err(EngineError::UnsupportedForMode),
        })
    }

    pub fn rename_team(&mut self, game_id: &str, team: TeamSlot, name: &str) -> Result<(), ApiError> {
        self.mutate(game_id, |board| board.rename_team(team, name))
    }

    pub fn rename_player(
        &mut self,
        game_id: &str,
        player: PlayerIndex,
        name: &str,
    ) -> Result<(), ApiError> {
        self.mutate(game_id, |board| board.rename_player(player, name))
    }

    /// Обнулить счёт игры; имена остаются.
    pub fn reset(&mut self, game_id: &str) -> Result<(), ApiError> {
        self.mutate(game_id, |board| {
            board.reset();
            Ok(())
        })
    }

    /// Завершить игру.
    ///
    /// Итог пишется в историю (если пользователь вошёл), счётчик рекламы
    /// сдвигается, табло обнуляется: повторное завершение того же счёта
    /// невозможно.
    pub fn finish_game(&mut self, game_id: &str) -> Result<FinishedGameDto, ApiError> {
        let config = get_game_config(game_id)?;
        let timestamp = self.clock.now_millis();

        let result = self.mutate(game_id, |board| {
            let result = board.to_game_result(config.id, timestamp)?;
            board.reset();
            Ok(result)
        })?;

        let document_id = self.history.append(&result);
        let offer_interstitial = self.ads.record_completed_game();

        info!(
            game_id = config.id,
            winner = %result.winner,
            saved = document_id.is_some(),
            offer_interstitial,
            "game finished"
        );

        Ok(FinishedGameDto {
            result,
            document_id,
            offer_interstitial,
        })
    }

    /// История текущего пользователя; `None` – лимит из конфигурации.
    pub fn history(&self, limit: Option<usize>) -> Vec<StoredGame> {
        self.history.list(limit.unwrap_or(self.history_limit))
    }

    /// Выполнить команду API.
    pub fn execute(&mut self, command: Command) -> Result<CommandResponse, ApiError> {
        match command {
            Command::Session(SessionCommand::SignIn { user_id }) => {
                self.sign_in(user_id);
                Ok(CommandResponse::Ok)
            }
            Command::Session(SessionCommand::SignOut) => {
                self.sign_out();
                Ok(CommandResponse::Ok)
            }
            Command::Game(command) => self.execute_game(command),
        }
    }

    fn execute_game(&mut self, command: GameCommand) -> Result<CommandResponse, ApiError> {
        let game_id = command.game_id().to_string();
        debug!(game_id = %game_id, "executing command");

        let response = match command {
            GameCommand::ApplyPoints(mut c) => {
                let outcome = self.apply_points(&game_id, &mut c.selection, c.result)?;
                CommandResponse::PointsApplied {
                    view: self.view(&game_id)?,
                    round: outcome.round,
                    awarded: outcome.awarded,
                    opponent_gain: outcome.opponent_gain,
                }
            }
            GameCommand::AddRound(c) => {
                let outcome = self.add_round(&game_id, &c.team1_input, &c.team2_input)?;
                let view = self.view(&game_id)?;
                let winner = outcome
                    .winner
                    .and_then(|slot| view.teams.get(slot.index()))
                    .map(|team| team.name.clone());
                CommandResponse::RoundAdded {
                    view,
                    round: outcome.round,
                    winner,
                }
            }
            GameCommand::RecordHand(mut c) => {
                let outcome = self.record_hand(&game_id, &mut c.selection)?;
                CommandResponse::HandRecorded {
                    view: self.view(&game_id)?,
                    round: outcome.round,
                    game_over: outcome.game_over,
                }
            }
            GameCommand::RenameTeam(c) => {
                self.rename_team(&game_id, c.team, &c.name)?;
                CommandResponse::Scoreboard(self.view(&game_id)?)
            }
            GameCommand::RenamePlayer(c) => {
                self.rename_player(&game_id, c.player, &c.name)?;
                CommandResponse::Scoreboard(self.view(&game_id)?)
            }
            GameCommand::Reset(_) => {
                self.reset(&game_id)?;
                CommandResponse::Scoreboard(self.view(&game_id)?)
            }
            GameCommand::Finish(_) => {
                let finished = self.finish_game(&game_id)?;
                CommandResponse::GameFinished {
                    finished,
                    view: self.view(&game_id)?,
                }
            }
        };

        Ok(response)
    }

    /// Выполнить запрос "только чтение".
    pub fn query(&mut self, query: Query) -> Result<QueryResponse, ApiError> {
        match query {
            Query::GetScoreboard { game_id } => Ok(QueryResponse::Scoreboard(self.view(&game_id)?)),
            Query::ListGames => Ok(QueryResponse::Games(build_game_list(all_games()))),
            Query::GetHistory { limit } => Ok(QueryResponse::History(self.history(limit))),
        }
    }

    /// Изменение табло: всё или ничего, затем сохранение счёта.
    fn mutate<T>(
        &mut self,
        game_id: &str,
        f: impl FnOnce(&mut Scoreboard) -> Result<T, EngineError>,
    ) -> Result<T, ApiError> {
        let config = get_game_config(game_id)?;
        let board = self.board_entry(config);
        let out = f(board)?;
        let snapshot = board.persisted();
        self.storage.save(config.id, &snapshot);
        Ok(out)
    }

    fn board_entry(&mut self, config: &'static GameConfig) -> &mut Scoreboard {
        let storage = &self.storage;
        self.boards.entry(config.id).or_insert_with(|| {
            debug!(game_id = config.id, "opening scoreboard");
            Scoreboard::restore(config, storage.load(config))
        })
    }
}
