use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;

use super::error::ModelError;
use super::number::LottoNumber;

/// Validated, ascending set of candidate numbers that tickets are drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pool {
    numbers: Vec<LottoNumber>,
}

impl Pool {
    /// Six numbers would leave a single ticket with nothing to filter.
    pub const MIN_SIZE: usize = 7;
    pub const MAX_SIZE: usize = LottoNumber::MAX as usize;

    /// Validate raw input and sort it ascending. Values are checked as they
    /// arrive, so the first bad one ends the read.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Result<Self, ModelError> {
        // 49 distinct in-range values is the most a pool can hold; a 50th is
        // always a duplicate or out of range and is rejected before the push.
        let mut numbers = Vec::new();
        numbers
            .try_reserve_exact(Self::MAX_SIZE)
            .map_err(|_| ModelError::Allocation(Self::MAX_SIZE))?;

        let mut seen = [false; LottoNumber::MAX as usize + 1];
        for value in values {
            let number = LottoNumber::new(value).ok_or(ModelError::NumberOutOfRange(value))?;
            let slot = &mut seen[number.value() as usize];
            if *slot {
                return Err(ModelError::DuplicateNumber(value));
            }
            *slot = true;
            numbers.push(number);
        }
        check_size(numbers.len())?;

        numbers.sort_unstable();
        Ok(Self { numbers })
    }

    /// Draw `size` distinct numbers from the full field using a seeded RNG.
    pub fn quick_pick(size: usize, seed: u64) -> Result<Self, ModelError> {
        check_size(size)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field: Vec<u8> = (LottoNumber::MIN..=LottoNumber::MAX).collect();
        field.shuffle(&mut rng);
        field.truncate(size);
        Self::new(field)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn numbers(&self) -> &[LottoNumber] {
        &self.numbers
    }

    pub fn iter(&self) -> impl Iterator<Item = &LottoNumber> {
        self.numbers.iter()
    }

    /// Map a tuple of pool positions to the numbers they refer to.
    pub fn resolve<const K: usize>(&self, indices: &[usize; K]) -> [LottoNumber; K] {
        indices.map(|index| self.numbers[index])
    }
}

fn check_size(found: usize) -> Result<(), ModelError> {
    if !(Pool::MIN_SIZE..=Pool::MAX_SIZE).contains(&found) {
        return Err(ModelError::PoolSize {
            found,
            min: Pool::MIN_SIZE,
            max: Pool::MAX_SIZE,
        });
    }
    Ok(())
}
