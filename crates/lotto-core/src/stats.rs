use std::collections::TryReserveError;

use serde::Serialize;

use crate::combo::TICKET_SIZE;
use crate::filter::Verdict;
use crate::model::Pool;

/// Running tally of verdicts plus how often each pool position was accepted.
///
/// Only the session records into it, so the three counters always add up to
/// the tickets seen and the frequency table always holds six entries per
/// accepted ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    rejected_even: u64,
    rejected_sum: u64,
    accepted: u64,
    frequency: Vec<u64>,
}

impl Statistics {
    /// Counters at zero with one frequency slot per pool position.
    pub(crate) fn for_pool(pool: &Pool) -> Result<Self, TryReserveError> {
        let mut frequency = Vec::new();
        frequency.try_reserve_exact(pool.len())?;
        frequency.resize(pool.len(), 0);
        Ok(Self {
            rejected_even: 0,
            rejected_sum: 0,
            accepted: 0,
            frequency,
        })
    }

    pub(crate) fn record(&mut self, verdict: Verdict, indices: &[usize; TICKET_SIZE]) {
        match verdict {
            Verdict::RejectedEven => self.rejected_even += 1,
            Verdict::RejectedSum => self.rejected_sum += 1,
            Verdict::Accepted => {
                self.accepted += 1;
                for &index in indices {
                    self.frequency[index] += 1;
                }
            }
        }
    }

    pub fn rejected_even(&self) -> u64 {
        self.rejected_even
    }

    pub fn rejected_sum(&self) -> u64 {
        self.rejected_sum
    }

    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Every ticket seen so far, whichever bucket it landed in.
    pub fn evaluated(&self) -> u64 {
        self.rejected_even + self.rejected_sum + self.accepted
    }

    pub fn frequency(&self) -> &[u64] {
        &self.frequency
    }
}
