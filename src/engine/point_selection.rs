use tracing::debug;

use crate::domain::{PointRules, Points, Team, TeamRound, TeamSlot};
use crate::engine::errors::EngineError;
use crate::engine::round_history::RoundHistory;
use crate::engine::selection::PointSelection;

/// Итог одного перехода в режиме выбора очков.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointOutcome {
    pub round: TeamRound,
    /// Сколько получила заказавшая команда.
    pub awarded: Points,
    /// Сколько получил соперник.
    pub opponent_gain: Points,
}

/// Табло режима выбора очков (Кут).
///
/// Условия победы нет – игру заканчивает пользователь.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSelectionEngine {
    pub teams: [Team; 2],
    rules: PointRules,
    point_values: &'static [u32],
    history: RoundHistory<TeamRound>,
}

impl PointSelectionEngine {
    pub fn new(rules: PointRules, point_values: &'static [u32], teams: [Team; 2]) -> Self {
        Self {
            teams,
            rules,
            point_values,
            history: RoundHistory::new(),
        }
    }

    pub fn rules(&self) -> &PointRules {
        &self.rules
    }

    pub fn point_values(&self) -> &'static [u32] {
        self.point_values
    }

    pub fn team(&self, slot: TeamSlot) -> &Team {
        &self.teams[slot.index()]
    }

    pub fn rounds(&self) -> &[TeamRound] {
        self.history.rounds()
    }

    /// Заказавшая команда взяла: ей `win(p)`, сопернику `lose(p)`.
    pub fn apply_win(&mut self, selection: &mut PointSelection) -> Result<PointOutcome, EngineError> {
        let (points, team) = self.validate(selection)?;
        let awarded = self.rules.win(points);
        let opponent_gain = self.rules.lose(points);

        let outcome = self.apply(team, awarded, opponent_gain);
        selection.clear();

        debug!(points, team = team.number(), %awarded, %opponent_gain, "kout: win applied");
        Ok(outcome)
    }

    /// Заказавшая команда не взяла: только сопернику `lose(p)`.
    pub fn apply_loss(&mut self, selection: &mut PointSelection) -> Result<PointOutcome, EngineError> {
        let (points, team) = self.validate(selection)?;
        let opponent_gain = self.rules.lose(points);

        let outcome = self.apply(team, Points::ZERO, opponent_gain);
        selection.clear();

        debug!(points, team = team.number(), %opponent_gain, "kout: loss applied");
        Ok(outcome)
    }

    /// Обнулить счёт и раунды; имена остаются.
    pub fn reset(&mut self) {
        for team in self.teams.iter_mut() {
            team.score = Points::ZERO;
        }
        self.history.clear();
    }

    /// Команда с большим счётом. При равенстве – никто.
    pub fn leader(&self) -> Option<TeamSlot> {
        let [first, second] = &self.teams;
        match first.score.cmp(&second.score) {
            std::cmp::Ordering::Greater => Some(TeamSlot::First),
            std::cmp::Ordering::Less => Some(TeamSlot::Second),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn validate(&self, selection: &PointSelection) -> Result<(u32, TeamSlot), EngineError> {
        let points = selection.points.ok_or(EngineError::PointsNotSelected)?;
        let team = selection.team.ok_or(EngineError::TeamNotSelected)?;

        if !self.point_values.contains(&points) {
            return Err(EngineError::InvalidPointValue(points));
        }

        Ok((points, team))
    }

    fn apply(&mut self, team: TeamSlot, awarded: Points, opponent_gain: Points) -> PointOutcome {
        let opponent = team.opponent();
        self.teams[team.index()].score += awarded;
        self.teams[opponent.index()].score += opponent_gain;

        let (team1_score, team2_score) = match team {
            TeamSlot::First => (awarded, opponent_gain),
            TeamSlot::Second => (opponent_gain, awarded),
        };

        let round = self
            .history
            .push_with(|round_number| TeamRound {
                round_number,
                team1_score,
                team2_score,
            })
            .clone();

        PointOutcome {
            round,
            awarded,
            opponent_gain,
        }
    }
}
