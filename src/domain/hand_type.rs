use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::points::Points;

/// Тип закрытой руки в Хэнде.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum HandType {
    Regular,
    JokerColored,
    OneJokerColored,
    TwoJokersColored,
    Zat,
    Finished,
}

/// Фиксированная таблица очков для типа руки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandTypeValues {
    /// Победителю (отрицательное – меньше очков значит лучше).
    pub winner_points: Points,
    /// Остальным, если у них нет нзуля.
    pub others_points: Points,
    /// Множитель нзуля. Выплата по нзулю заменяет `others_points`, а не добавляется к ним.
    pub nzol_multiplier: i64,
}

impl HandType {
    pub const ALL: [HandType; 6] = [
        HandType::Regular,
        HandType::JokerColored,
        HandType::OneJokerColored,
        HandType::TwoJokersColored,
        HandType::Zat,
        HandType::Finished,
    ];

    pub fn values(self) -> HandTypeValues {
        let (winner, others, multiplier) = match self {
            HandType::Regular => (-60, 200, 2),
            HandType::JokerColored => (-120, 400, 4),
            HandType::OneJokerColored => (-240, 800, 8),
            HandType::TwoJokersColored => (-360, 1200, 16),
            HandType::Zat => (-480, 1600, 32),
            HandType::Finished => (-30, 100, 1),
        };

        HandTypeValues {
            winner_points: Points(winner),
            others_points: Points(others),
            nzol_multiplier: multiplier,
        }
    }

    /// Ключ в том виде, в каком он хранится и вводится (camelCase).
    pub fn as_str(self) -> &'static str {
        match self {
            HandType::Regular => "regular",
            HandType::JokerColored => "jokerColored",
            HandType::OneJokerColored => "oneJokerColored",
            HandType::TwoJokersColored => "twoJokersColored",
            HandType::Zat => "zat",
            HandType::Finished => "finished",
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Неизвестный тип руки.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Неизвестный тип руки `{0}`")]
pub struct UnknownHandType(pub String);

impl FromStr for HandType {
    type Err = UnknownHandType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        HandType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownHandType(trimmed.to_string()))
    }
}
