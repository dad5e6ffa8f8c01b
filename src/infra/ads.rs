use serde::{Deserialize, Serialize};

/// Межстраничная реклама по умолчанию – каждые 3 завершённые игры.
pub const DEFAULT_INTERSTITIAL_EVERY: u32 = 3;

/// Счётчик завершённых игр для межстраничной рекламы.
///
/// Показ рекламы – дело внешнего SDK; здесь только решение «предложить или нет».
/// Неудачный показ никак не влияет на экран итогов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterstitialCadence {
    every: u32,
    completed: u32,
}

impl InterstitialCadence {
    /// `every == 0` выключает рекламу.
    pub fn new(every: u32) -> Self {
        Self {
            every,
            completed: 0,
        }
    }

    pub fn completed_games(&self) -> u32 {
        self.completed
    }

    /// Предлагать ли рекламу при текущем счётчике.
    pub fn should_offer(&self) -> bool {
        self.every > 0 && self.completed > 0 && self.completed % self.every == 0
    }

    /// Отметить завершённую игру; возвращает, нужно ли предложить рекламу сейчас.
    pub fn record_completed_game(&mut self) -> bool {
        self.completed = self.completed.saturating_add(1);
        self.should_offer()
    }
}

impl Default for InterstitialCadence {
    fn default() -> Self {
        Self::new(DEFAULT_INTERSTITIAL_EVERY)
    }
}
