use super::counter::binomial;

/// Lazy k-of-n generator over pool positions.
///
/// Yields strictly increasing `[usize; K]` tuples in lexicographic order: the
/// first position varies slowest, exactly like `K` nested ascending loops
/// `i1 in 0..=n-K`, `i2 in i1+1..=n-K+1`, and so on. Cloning, or calling
/// [`Combinations::new`] again, restarts the identical sequence.
#[derive(Debug, Clone)]
pub struct Combinations<const K: usize> {
    n: usize,
    next: Option<[usize; K]>,
    remaining: Option<u64>,
}

impl<const K: usize> Combinations<K> {
    pub fn new(n: usize) -> Self {
        let next = (K <= n).then(|| core::array::from_fn(|i| i));
        Self {
            n,
            next,
            remaining: if K <= n { binomial(n, K).ok() } else { Some(0) },
        }
    }

    /// Tuples still to come, when that count fits in 64 bits.
    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }

    fn advance(&self, current: &[usize; K]) -> Option<[usize; K]> {
        let mut slot = (0..K).rev().find(|&i| current[i] < self.n - K + i)?;
        let mut following = *current;
        following[slot] += 1;
        while slot + 1 < K {
            following[slot + 1] = following[slot] + 1;
            slot += 1;
        }
        Some(following)
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.advance(&current);
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(exact) => (exact, Some(exact)),
            None => (0, None),
        }
    }
}
