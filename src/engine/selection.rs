//! Отложенный выбор пользователя до нажатия кнопки.
//!
//! Хранится у вызывающего кода (экран, CLI), а не в движке; движок
//! получает его аргументом и очищает после успешного перехода.

use serde::{Deserialize, Serialize};

use crate::domain::{HandType, PlayerIndex, TeamSlot, HAND_PLAYER_COUNT};

/// Выбор для режима выбора очков: сколько очков и какая команда заказала.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointSelection {
    pub points: Option<u32>,
    pub team: Option<TeamSlot>,
}

impl PointSelection {
    pub fn new(points: u32, team: TeamSlot) -> Self {
        Self {
            points: Some(points),
            team: Some(team),
        }
    }

    pub fn clear(&mut self) {
        self.points = None;
        self.team = None;
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_none() && self.team.is_none()
    }
}

/// Выбор для Хэнда: кто закрыл, каким типом, и нзули остальных (как ввёл пользователь).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSelection {
    pub winner: Option<PlayerIndex>,
    pub hand_type: Option<HandType>,
    pub nzol: [String; HAND_PLAYER_COUNT],
}

impl HandSelection {
    pub fn new(winner: PlayerIndex, hand_type: HandType) -> Self {
        Self {
            winner: Some(winner),
            hand_type: Some(hand_type),
            nzol: Default::default(),
        }
    }

    /// Builder-стиль для тестов и CLI.
    pub fn with_nzol(mut self, player: PlayerIndex, value: impl Into<String>) -> Self {
        if let Some(slot) = self.nzol.get_mut(player) {
            *slot = value.into();
        }
        self
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
