use serde::{Deserialize, Serialize};

use crate::domain::round::NumberedRound;

/// История раундов одной сессии (с последнего сброса).
///
/// Номера раундов выдаёт сама история: 1, 2, 3, ... без пропусков.
/// В хранилище не сохраняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory<R> {
    rounds: Vec<R>,
}

impl<R> Default for RoundHistory<R> {
    fn default() -> Self {
        Self { rounds: Vec::new() }
    }
}

impl<R: NumberedRound> RoundHistory<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Номер, который получит следующий раунд.
    pub fn next_round_number(&self) -> u32 {
        self.rounds.len() as u32 + 1
    }

    /// Добавить раунд; `build` получает его номер.
    pub fn push_with(&mut self, build: impl FnOnce(u32) -> R) -> &R {
        let number = self.next_round_number();
        let round = build(number);
        debug_assert_eq!(round.round_number(), number);
        self.rounds.push(round);
        &self.rounds[self.rounds.len() - 1]
    }

    pub fn rounds(&self) -> &[R] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn last(&self) -> Option<&R> {
        self.rounds.last()
    }

    pub fn clear(&mut self) {
        self.rounds.clear();
    }
}
