use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Очки. Обёртка над i64, чтобы не путать с номерами раундов и индексами.
///
/// Знаковая: в Хэнде победитель раунда получает отрицательные очки.
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct Points(pub i64);

impl Points {
    pub const ZERO: Points = Points(0);

    pub fn new(amount: i64) -> Self {
        Points(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for Points {
    fn from(value: i64) -> Self {
        Points(value)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Self::Output {
        Points(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Points {
    type Output = Points;

    fn sub(self, rhs: Points) -> Self::Output {
        Points(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Points {
    type Output = Points;

    fn neg(self) -> Self::Output {
        Points(self.0.saturating_neg())
    }
}

impl core::iter::Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Points::ZERO, |acc, p| acc + p)
    }
}
