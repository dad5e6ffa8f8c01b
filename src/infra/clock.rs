use std::cell::Cell;

use time::OffsetDateTime;

/// Источник времени для отметок в истории.
pub trait Clock {
    /// Unix-время в миллисекундах.
    fn now_millis(&self) -> i64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
    }
}

/// Ручные часы для тестов: каждый вызов сдвигает время на `step`.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<i64>,
    step: i64,
}

impl ManualClock {
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            now: Cell::new(start),
            step,
        }
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

/// Отметка времени в RFC 3339 (для вывода истории).
pub fn format_timestamp(millis: i64) -> String {
    use time::format_description::well_known::Rfc3339;

    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .ok()
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_else(|| millis.to_string())
}
