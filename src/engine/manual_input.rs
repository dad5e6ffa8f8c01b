use tracing::{debug, info};

use crate::domain::{Points, Team, TeamRound, TeamSlot, WinCondition};
use crate::engine::errors::EngineError;
use crate::engine::round_history::RoundHistory;
use crate::engine::validation::validate_round_inputs;

/// Итог добавленного раунда.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round: TeamRound,
    /// Команда, дошедшая до порога этим раундом.
    pub winner: Option<TeamSlot>,
}

/// Табло с ручным вводом очков до порога (Балот).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManualInputEngine {
    pub teams: [Team; 2],
    win_condition: WinCondition,
    winner: Option<TeamSlot>,
    history: RoundHistory<TeamRound>,
}

impl ManualInputEngine {
    pub fn new(win_condition: WinCondition, teams: [Team; 2]) -> Self {
        let mut engine = Self {
            teams,
            win_condition,
            winner: None,
            history: RoundHistory::new(),
        };
        // Сохранённый счёт мог уже перейти порог.
        engine.check_win();
        engine
    }

    pub fn target_score(&self) -> Points {
        self.win_condition.target_score
    }

    pub fn team(&self, slot: TeamSlot) -> &Team {
        &self.teams[slot.index()]
    }

    pub fn rounds(&self) -> &[TeamRound] {
        self.history.rounds()
    }

    pub fn is_won(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<TeamSlot> {
        self.winner
    }

    /// Добавить раунд из пользовательского ввода.
    ///
    /// После победы раунды не принимаются до сброса.
    pub fn add_round(
        &mut self,
        team1_input: &str,
        team2_input: &str,
    ) -> Result<RoundOutcome, EngineError> {
        if self.winner.is_some() {
            return Err(EngineError::GameOver);
        }

        let (team1_score, team2_score) = validate_round_inputs(team1_input, team2_input)?;

        self.teams[0].score += team1_score;
        self.teams[1].score += team2_score;

        let round = self
            .history
            .push_with(|round_number| TeamRound {
                round_number,
                team1_score,
                team2_score,
            })
            .clone();

        debug!(
            round = round.round_number,
            %team1_score,
            %team2_score,
            "baloot: round added"
        );

        let winner = self.check_win();
        if let Some(slot) = winner {
            let team = &self.teams[slot.index()];
            info!(winner = %team.name, score = %team.score, "baloot: target reached");
        }

        Ok(RoundOutcome { round, winner })
    }

    /// Обнулить счёт, раунды и победителя; имена остаются.
    pub fn reset(&mut self) {
        for team in self.teams.iter_mut() {
            team.score = Points::ZERO;
        }
        self.winner = None;
        self.history.clear();
    }

    /// Первая по порядку команда на пороге или выше выигрывает
    /// (при одновременном переходе – команда 1).
    fn check_win(&mut self) -> Option<TeamSlot> {
        if self.winner.is_some() {
            return self.winner;
        }

        let target = self.win_condition.target_score;
        self.winner = TeamSlot::BOTH
            .into_iter()
            .find(|slot| self.teams[slot.index()].score >= target);
        self.winner
    }
}
