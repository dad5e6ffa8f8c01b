use serde::{Deserialize, Serialize};

use crate::domain::hand_type::HandType;
use crate::domain::player::PlayerIndex;
use crate::domain::points::Points;

/// Раунд в играх двух команд: сколько очков получила каждая команда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamRound {
    pub round_number: u32,
    pub team1_score: Points,
    pub team2_score: Points,
}

/// Раунд Хэнда: кто закрыл, каким типом и счёт всех игроков после раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRound {
    pub round_number: u32,
    pub winner_index: PlayerIndex,
    pub winner_name: String,
    pub hand_type: HandType,
    pub scores: Vec<Points>,
}

/// Всё, что имеет порядковый номер раунда.
pub trait NumberedRound {
    fn round_number(&self) -> u32;
}

impl NumberedRound for TeamRound {
    fn round_number(&self) -> u32 {
        self.round_number
    }
}

impl NumberedRound for HandRound {
    fn round_number(&self) -> u32 {
        self.round_number
    }
}
