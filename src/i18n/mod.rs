//! Таблица переводов: `(Language, MessageKey) -> строка` с подстановкой `{placeholder}`.
//!
//! Английский – базовый язык; если в арабской таблице ключа нет, берётся английский.

mod ar;
mod en;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{HandType, TeamSlot};
use crate::engine::EngineError;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

/// Направление текста для раскладки экрана.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl Language {
    pub fn direction(self) -> TextDirection {
        match self {
            Language::En => TextDirection::LeftToRight,
            Language::Ar => TextDirection::RightToLeft,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.direction() == TextDirection::RightToLeft
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Неизвестный язык `{0}`")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Ключи сообщений, которые видит пользователь.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AppTitle,
    SelectGame,
    Ok,
    Error,
    GameOver,
    Round,
    RoundsHistory,
    FinalResults,
    Leading,
    SelectPoints,
    Win,
    Lose,
    AddRound,
    Reset,
    Nzol,
    GameSaved,
    LoginToSaveGames,
    NoGamesYet,
    PlayingAsGuest,
    SignedInAs,
    GameHistory,
    InvalidInput,
    /// `{team}`
    EnterValidNumberForTeam,
    EnterAtLeastOneScore,
    /// `{name}`
    TeamWins,
    /// `{name}`, `{score}`
    WinsWithScore,
    SelectWinnerAndHandType,
    GameEndedAfterRounds,
    HandRecorded,
    /// `{round}`, `{name}`, `{handType}`
    RoundWonHand,
    SelectPointsAndTeam,
    /// `{points}`
    InvalidPointValue,
    /// `{player}`
    InvalidPlayer,
    GameNotFinished,
    NoWinner,
    NotSupportedForMode,
    /// `{game}`
    UnknownGame,
    InterstitialOffered,
    GameNameKout,
    GameNameBaloot,
    GameNameHand,
    HandTypeRegular,
    HandTypeJokerColored,
    HandTypeOneJokerColored,
    HandTypeTwoJokersColored,
    HandTypeZat,
    HandTypeFinished,
}

impl MessageKey {
    pub fn for_hand_type(hand_type: HandType) -> Self {
        match hand_type {
            HandType::Regular => MessageKey::HandTypeRegular,
            HandType::JokerColored => MessageKey::HandTypeJokerColored,
            HandType::OneJokerColored => MessageKey::HandTypeOneJokerColored,
            HandType::TwoJokersColored => MessageKey::HandTypeTwoJokersColored,
            HandType::Zat => MessageKey::HandTypeZat,
            HandType::Finished => MessageKey::HandTypeFinished,
        }
    }

    /// Название игры по id каталога.
    pub fn for_game(game_id: &str) -> Option<Self> {
        match game_id {
            "kout" => Some(MessageKey::GameNameKout),
            "baloot" => Some(MessageKey::GameNameBaloot),
            "hand" => Some(MessageKey::GameNameHand),
            _ => None,
        }
    }
}

/// Строка сообщения без подстановок.
pub fn translate(language: Language, key: MessageKey) -> &'static str {
    match language {
        Language::En => en::text(key),
        Language::Ar => ar::text(key).unwrap_or_else(|| en::text(key)),
    }
}

/// Сообщение с подстановкой `{name}` -> значение.
pub fn format_message(language: Language, key: MessageKey, args: &[(&str, &str)]) -> String {
    substitute(translate(language, key), args)
}

/// Заменить все `{placeholder}` из `args`; неизвестные остаются как есть.
pub fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{name}}}"), value)
    })
}

impl EngineError {
    /// Ключ сообщения и подстановки для показа пользователю.
    pub fn message(&self) -> (MessageKey, Vec<(&'static str, String)>) {
        match self {
            EngineError::PointsNotSelected | EngineError::TeamNotSelected => {
                (MessageKey::SelectPointsAndTeam, vec![])
            }
            EngineError::InvalidPointValue(p) => {
                (MessageKey::InvalidPointValue, vec![("points", p.to_string())])
            }
            EngineError::InvalidRoundInput(team) => (
                MessageKey::EnterValidNumberForTeam,
                vec![("team", team_number(*team))],
            ),
            EngineError::EmptyRound => (MessageKey::EnterAtLeastOneScore, vec![]),
            EngineError::HandSelectionIncomplete => (MessageKey::SelectWinnerAndHandType, vec![]),
            EngineError::InvalidPlayerIndex(i) => {
                (MessageKey::InvalidPlayer, vec![("player", (i + 1).to_string())])
            }
            EngineError::GameOver => (MessageKey::GameOver, vec![]),
            EngineError::GameNotFinished => (MessageKey::GameNotFinished, vec![]),
            EngineError::NoWinner => (MessageKey::NoWinner, vec![]),
            EngineError::UnsupportedForMode => (MessageKey::NotSupportedForMode, vec![]),
        }
    }

    /// Локализованный текст ошибки.
    pub fn localize(&self, language: Language) -> String {
        let (key, args) = self.message();
        let args: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
        format_message(language, key, &args)
    }
}

fn team_number(team: TeamSlot) -> String {
    team.number().to_string()
}
