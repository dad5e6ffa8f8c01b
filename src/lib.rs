//! Tsjel: табло для карточных игр Кут, Балот и Хэнд.
//!
//! Слои:
//! - `domain` – каталог игр и данные;
//! - `engine` – правила подсчёта трёх режимов;
//! - `infra` – хранение счёта, история, часы, логи;
//! - `api` + `app` – команды, запросы и диспетчер над ними.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod i18n;
pub mod infra;

pub use app::App;
pub use config::{AppConfig, ConfigError};
