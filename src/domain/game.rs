use serde::Serialize;

use crate::domain::points::Points;
use crate::domain::GameId;

/// Правила начисления для режима выбора очков.
///
/// `win(p)` – заказавшей команде, `lose(p)` – сопернику.
/// Для «особого» значения действуют фиксированные очки
/// (в Куте: 9 → 36 / 18), остальные значения: `p` и `p * lose_multiplier`.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PointRules {
    pub special_value: u32,
    pub special_win: i64,
    pub special_lose: i64,
    pub lose_multiplier: i64,
}

impl PointRules {
    pub const KOUT: PointRules = PointRules {
        special_value: 9,
        special_win: 36,
        special_lose: 18,
        lose_multiplier: 2,
    };

    pub fn win(&self, points: u32) -> Points {
        if points == self.special_value {
            Points(self.special_win)
        } else {
            Points(i64::from(points))
        }
    }

    pub fn lose(&self, points: u32) -> Points {
        if points == self.special_value {
            Points(self.special_lose)
        } else {
            Points(i64::from(points).saturating_mul(self.lose_multiplier))
        }
    }
}

/// Условие победы для игр с ручным вводом.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct WinCondition {
    pub target_score: Points,
}

impl Default for WinCondition {
    fn default() -> Self {
        Self {
            target_score: Points(152),
        }
    }
}

/// Режим подсчёта. Каждый вариант несёт ровно те параметры, которые ему нужны.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScoringMode {
    /// Выбор очков из фиксированного набора (Кут).
    PointSelection {
        point_values: &'static [u32],
        rules: PointRules,
    },
    /// Ручной ввод очков за раунд до порога (Балот).
    ManualInput { win_condition: WinCondition },
    /// Хэнд: четыре игрока, ограниченное число раундов, меньше – лучше.
    Hand { max_rounds: u32 },
}

/// Вид режима без параметров – для DTO и сопоставления.
#[derive(Clone, Copy, Debug, Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ScoringModeKind {
    PointSelection,
    ManualInput,
    Hand,
}

/// Конфигурация игры из каталога. Создаётся один раз при старте и не меняется.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct GameConfig {
    pub id: GameId,
    pub name: &'static str,
    pub description: &'static str,
    pub mode: ScoringMode,
}

impl GameConfig {
    pub fn mode_kind(&self) -> ScoringModeKind {
        match self.mode {
            ScoringMode::PointSelection { .. } => ScoringModeKind::PointSelection,
            ScoringMode::ManualInput { .. } => ScoringModeKind::ManualInput,
            ScoringMode::Hand { .. } => ScoringModeKind::Hand,
        }
    }

    /// Набор очков для выбора; пустой, если режим не `PointSelection`.
    pub fn point_values(&self) -> &'static [u32] {
        match self.mode {
            ScoringMode::PointSelection { point_values, .. } => point_values,
            _ => &[],
        }
    }

    pub fn win_condition(&self) -> Option<WinCondition> {
        match self.mode {
            ScoringMode::ManualInput { win_condition } => Some(win_condition),
            _ => None,
        }
    }
}
