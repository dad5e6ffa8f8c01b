//! Движок подсчёта: три режима и общее табло над ними.
//!
//! Высокоуровневый объект: `Scoreboard`
//! Основные операции:
//!   - `PointSelectionEngine::apply_win` / `apply_loss` – Кут
//!   - `ManualInputEngine::add_round` – Балот
//!   - `HandEngine::record_hand` – Хэнд
//!   - `Scoreboard::reset` – новый счёт с теми же именами

pub mod errors;
pub mod hand_mode;
pub mod manual_input;
pub mod point_selection;
pub mod ranking;
pub mod round_history;
pub mod scoreboard;
pub mod selection;
pub mod validation;

pub use errors::EngineError;
pub use hand_mode::{HandEngine, HandOutcome};
pub use manual_input::{ManualInputEngine, RoundOutcome};
pub use point_selection::{PointOutcome, PointSelectionEngine};
pub use ranking::{leader, podium, standings, Standing};
pub use round_history::RoundHistory;
pub use scoreboard::{PersistedScores, Scoreboard};
pub use selection::{HandSelection, PointSelection};
