//! Инфраструктурный слой вокруг движка подсчёта:
//! - локальное хранение счёта (key-value);
//! - история игр пользователя;
//! - id документов и пользователей;
//! - часы, реклама, логи;
//! - маппинги между domain и API.

pub mod ads;
pub mod clock;
pub mod history;
pub mod ids;
pub mod logging;
pub mod mapping;
pub mod persistence;

pub use ads::*;
pub use clock::*;
pub use history::*;
pub use ids::*;
pub use mapping::*;
pub use persistence::*;
