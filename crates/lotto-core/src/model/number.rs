use core::fmt;

use serde::{Deserialize, Serialize};

/// A single ball drawn from the 1..=49 field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct LottoNumber(u8);

impl LottoNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 49;

    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }
}

impl TryFrom<u8> for LottoNumber {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        LottoNumber::new(value).ok_or_else(|| {
            format!(
                "number {value} outside {}..={}",
                LottoNumber::MIN,
                LottoNumber::MAX
            )
        })
    }
}

impl From<LottoNumber> for u8 {
    fn from(number: LottoNumber) -> Self {
        number.0
    }
}

impl fmt::Display for LottoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
