use thiserror::Error;

/// Reasons a pool or a pair of bounds cannot be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("pool must hold between {min} and {max} numbers, got {found}")]
    PoolSize { found: usize, min: usize, max: usize },
    #[error("number {0} is outside 1..=49")]
    NumberOutOfRange(u8),
    #[error("number {0} appears more than once")]
    DuplicateNumber(u8),
    #[error("lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds { lower: u16, upper: u16 },
    #[error("{label} bounds must lie within {min}..={max}, got {lower}..={upper}")]
    BoundsOutOfDomain {
        label: &'static str,
        lower: u16,
        upper: u16,
        min: u16,
        max: u16,
    },
    #[error("could not allocate storage for {0} numbers")]
    Allocation(usize),
}
