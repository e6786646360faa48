use thiserror::Error;

/// Numbers on one ticket.
pub const TICKET_SIZE: usize = 6;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CountError {
    #[error("cannot choose {k} from {n}")]
    InvalidArgument { n: usize, k: usize },
    #[error("C({n}, {k}) does not fit in 64 bits")]
    Overflow { n: usize, k: usize },
}

/// Exact binomial coefficient C(n, k).
///
/// Multiplies and divides in lockstep (`acc * (n - j) / (j + 1)`), so the
/// running value is always C(n, j + 1) and no factorial is ever formed. After
/// step `j` the accumulator is a product of `j + 1` consecutive integers over
/// `(j + 1)!`, which is why every division is exact.
pub fn binomial(n: usize, k: usize) -> Result<u64, CountError> {
    if k > n {
        return Err(CountError::InvalidArgument { n, k });
    }
    let steps = k.min(n - k);
    let mut acc: u64 = 1;
    for j in 0..steps {
        let factor = (n - j) as u64;
        acc = acc
            .checked_mul(factor)
            .ok_or(CountError::Overflow { n, k })?
            / (j as u64 + 1);
    }
    Ok(acc)
}

/// How many six-number tickets a pool of `n` numbers yields.
pub fn combination_count(n: usize) -> Result<u64, CountError> {
    binomial(n, TICKET_SIZE)
}
