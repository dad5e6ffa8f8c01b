//! Конфигурация приложения из переменных окружения.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::i18n::Language;
use crate::infra::ads::DEFAULT_INTERSTITIAL_EVERY;
use crate::infra::history::DEFAULT_HISTORY_LIMIT;

pub const ENV_DATA_DIR: &str = "TSJEL_DATA_DIR";
pub const ENV_LANG: &str = "TSJEL_LANG";
pub const ENV_INTERSTITIAL_EVERY: &str = "TSJEL_INTERSTITIAL_EVERY";
pub const ENV_HISTORY_LIMIT: &str = "TSJEL_HISTORY_LIMIT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Некорректное значение {var}={value}: {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Каталог для файлов счёта и истории.
    pub data_dir: PathBuf,
    pub language: Language,
    /// Межстраничная реклама каждые N игр (0 – выключена).
    pub interstitial_every: u32,
    /// Сколько игр показывать в истории.
    pub history_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".tsjel"),
            language: Language::En,
            interstitial_every: DEFAULT_INTERSTITIAL_EVERY,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl AppConfig {
    /// Прочитать конфигурацию из окружения; отсутствующие переменные – по умолчанию.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// То же, но с произвольным источником переменных (для тестов).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup(ENV_DATA_DIR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let language = match lookup(ENV_LANG) {
            Some(value) => value.parse().map_err(|err: crate::i18n::UnknownLanguage| {
                ConfigError::InvalidVar {
                    var: ENV_LANG,
                    value: value.clone(),
                    reason: err.to_string(),
                }
            })?,
            None => defaults.language,
        };

        let interstitial_every = parse_number(&lookup, ENV_INTERSTITIAL_EVERY)?
            .unwrap_or(defaults.interstitial_every);

        let history_limit =
            parse_number(&lookup, ENV_HISTORY_LIMIT)?.unwrap_or(defaults.history_limit);

        Ok(Self {
            data_dir,
            language,
            interstitial_every,
            history_limit,
        })
    }

    pub fn scores_path(&self) -> PathBuf {
        self.data_dir.join("scores.json")
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join("history.json")
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|err| ConfigError::InvalidVar {
                var,
                value,
                reason: err.to_string(),
            }),
        None => Ok(None),
    }
}
