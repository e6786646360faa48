use core::fmt;

use serde::Serialize;

use super::error::ModelError;

/// Inclusive acceptance window `lower..=upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Bounds<T> {
    lower: T,
    upper: T,
}

impl<T> Bounds<T>
where
    T: Copy + Ord + Into<u16>,
{
    pub fn new(lower: T, upper: T) -> Result<Self, ModelError> {
        if lower > upper {
            return Err(ModelError::InvertedBounds {
                lower: lower.into(),
                upper: upper.into(),
            });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> T {
        self.lower
    }

    pub fn upper(&self) -> T {
        self.upper
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.lower && value <= self.upper
    }

    fn within(self, label: &'static str, min: T, max: T) -> Result<Self, ModelError> {
        if self.lower < min || self.upper > max {
            return Err(ModelError::BoundsOutOfDomain {
                label,
                lower: self.lower.into(),
                upper: self.upper.into(),
                min: min.into(),
                max: max.into(),
            });
        }
        Ok(self)
    }
}

impl Bounds<u8> {
    pub const EVEN_MIN: u8 = 0;
    pub const EVEN_MAX: u8 = 6;

    /// How many even numbers a six-number ticket may hold.
    pub fn even_count(lower: u8, upper: u8) -> Result<Self, ModelError> {
        Self::new(lower, upper)?.within("even-count", Self::EVEN_MIN, Self::EVEN_MAX)
    }

    pub fn widest_even_count() -> Self {
        Self {
            lower: Self::EVEN_MIN,
            upper: Self::EVEN_MAX,
        }
    }
}

impl Bounds<u16> {
    /// 1+2+3+4+5+6
    pub const SUM_MIN: u16 = 21;
    /// 44+45+46+47+48+49
    pub const SUM_MAX: u16 = 279;

    /// Window for the arithmetic sum of a six-number ticket.
    pub fn sum(lower: u16, upper: u16) -> Result<Self, ModelError> {
        Self::new(lower, upper)?.within("sum", Self::SUM_MIN, Self::SUM_MAX)
    }

    pub fn widest_sum() -> Self {
        Self {
            lower: Self::SUM_MIN,
            upper: Self::SUM_MAX,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.lower, self.upper)
    }
}
