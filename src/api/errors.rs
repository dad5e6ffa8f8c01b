use serde::{Deserialize, Serialize};

use crate::domain::CatalogError;
use crate::engine::EngineError;
use crate::i18n::{format_message, Language, MessageKey};

/// Ошибки внешнего API (то, что видит экран / клиент).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Игры с таким id нет в каталоге.
    GameNotFound(String),

    /// Ошибка движка подсчёта; состояние не изменилось.
    Engine(EngineError),
}

impl ApiError {
    /// Текст ошибки на языке пользователя.
    pub fn localize(&self, language: Language) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::GameNotFound(game) => {
                format_message(language, MessageKey::UnknownGame, &[("game", game.as_str())])
            }
            ApiError::Engine(err) => err.localize(language),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Некорректный запрос: {msg}"),
            ApiError::GameNotFound(game) => write!(f, "Игра `{game}` не найдена"),
            ApiError::Engine(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Engine(err)
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownGame(id) => ApiError::GameNotFound(id),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
