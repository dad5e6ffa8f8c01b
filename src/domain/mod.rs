//! Доменная модель: каталог игр, команды, игроки, очки, раунды, итоги.

pub mod catalog;
pub mod game;
pub mod hand_type;
pub mod player;
pub mod points;
pub mod result;
pub mod round;
pub mod team;

/// Id игры в каталоге ("kout", "baloot", "hand").
pub type GameId = &'static str;

pub use catalog::*;
pub use game::*;
pub use hand_type::*;
pub use player::*;
pub use points::*;
pub use result::*;
pub use round::*;
pub use team::*;
