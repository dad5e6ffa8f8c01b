use tracing::{debug, info};

use crate::domain::{HandRound, HandType, Player, PlayerIndex, Points};
use crate::engine::errors::EngineError;
use crate::engine::ranking::{self, Standing};
use crate::engine::round_history::RoundHistory;
use crate::engine::selection::HandSelection;
use crate::engine::validation::{nzol_payout, parse_nzol};

/// Итог записанной руки.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandOutcome {
    pub round: HandRound,
    /// Изменение счёта каждого игрока в этом раунде.
    pub deltas: Vec<Points>,
    /// Это был последний разрешённый раунд.
    pub game_over: bool,
}

/// Табло Хэнда: четыре игрока, фиксированное число раундов, меньше – лучше.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandEngine {
    pub players: Vec<Player>,
    current_round: u32,
    max_rounds: u32,
    history: RoundHistory<HandRound>,
}

impl HandEngine {
    pub fn new(max_rounds: u32, players: Vec<Player>) -> Self {
        Self {
            players,
            current_round: 1,
            max_rounds,
            history: RoundHistory::new(),
        }
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn rounds(&self) -> &[HandRound] {
        self.history.rounds()
    }

    pub fn is_finished(&self) -> bool {
        self.current_round > self.max_rounds
    }

    pub fn standings(&self) -> Vec<Standing> {
        ranking::standings(&self.players)
    }

    pub fn leader(&self) -> Option<PlayerIndex> {
        ranking::leader(&self.players)
    }

    /// Подиум – только когда игра закончена.
    pub fn podium(&self) -> Option<Vec<Standing>> {
        self.is_finished().then(|| ranking::podium(&self.players))
    }

    /// Записать закрытую руку.
    ///
    /// Победителю – `winner_points`. Остальным – выплата по нзулю,
    /// если он введён, иначе `others_points`. Всё или ничего:
    /// сначала проверяется выбор, потом применяются очки.
    pub fn record_hand(&mut self, selection: &mut HandSelection) -> Result<HandOutcome, EngineError> {
        let (winner, hand_type) = match (selection.winner, selection.hand_type) {
            (Some(w), Some(t)) => (w, t),
            _ => return Err(EngineError::HandSelectionIncomplete),
        };

        if self.is_finished() {
            return Err(EngineError::GameOver);
        }

        if winner >= self.players.len() {
            return Err(EngineError::InvalidPlayerIndex(winner));
        }

        let deltas = self.compute_deltas(winner, hand_type, selection);

        for (player, delta) in self.players.iter_mut().zip(deltas.iter()) {
            player.score += *delta;
        }

        let winner_name = self.players[winner].name.clone();
        let scores: Vec<Points> = self.players.iter().map(|p| p.score).collect();

        let round = self
            .history
            .push_with(|round_number| HandRound {
                round_number,
                winner_index: winner,
                winner_name,
                hand_type,
                scores,
            })
            .clone();

        self.current_round += 1;
        selection.clear();

        debug!(
            round = round.round_number,
            winner = %round.winner_name,
            hand_type = %hand_type,
            "hand: round recorded"
        );

        let game_over = self.is_finished();
        if game_over {
            info!(rounds = self.history.len(), "hand: game over");
        }

        Ok(HandOutcome {
            round,
            deltas,
            game_over,
        })
    }

    /// Обнулить счёт, раунды и вернуться к первому раунду; имена остаются.
    pub fn reset(&mut self) {
        for player in self.players.iter_mut() {
            player.score = Points::ZERO;
        }
        self.current_round = 1;
        self.history.clear();
    }

    fn compute_deltas(
        &self,
        winner: PlayerIndex,
        hand_type: HandType,
        selection: &HandSelection,
    ) -> Vec<Points> {
        let values = hand_type.values();

        (0..self.players.len())
            .map(|index| {
                if index == winner {
                    return values.winner_points;
                }

                let raw = selection.nzol.get(index).map(String::as_str).unwrap_or("");
                match parse_nzol(raw) {
                    Some(nzol) => nzol_payout(nzol, values.nzol_multiplier),
                    None => values.others_points,
                }
            })
            .collect()
    }
}
