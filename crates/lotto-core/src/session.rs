use std::ops::ControlFlow;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::combo::{Combinations, CountError, TICKET_SIZE, combination_count};
use crate::filter::{Constraints, Verdict};
use crate::model::{LottoNumber, Pool};
use crate::stats::Statistics;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("could not allocate a frequency table for {0} numbers")]
    Allocation(usize),
    #[error(transparent)]
    Count(#[from] CountError),
    #[error("evaluated {evaluated} tickets but expected {total}")]
    CountMismatch { evaluated: u64, total: u64 },
    #[error("sweep stopped after {evaluated} of {total} tickets")]
    Stopped { evaluated: u64, total: u64 },
}

/// One exhaustive sweep over every ticket a pool can produce.
#[derive(Debug)]
pub struct Session {
    pool: Pool,
    constraints: Constraints,
    stats: Statistics,
}

/// Everything the reporting side needs once a sweep finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub pool: Pool,
    pub constraints: Constraints,
    pub total: u64,
    pub stats: Statistics,
}

impl Session {
    pub fn new(pool: Pool, constraints: Constraints) -> Result<Self, SessionError> {
        let stats =
            Statistics::for_pool(&pool).map_err(|_| SessionError::Allocation(pool.len()))?;
        Ok(Self {
            pool,
            constraints,
            stats,
        })
    }

    /// Enumerate, classify and tally every ticket, handing each accepted one to
    /// `on_accept` as it is produced. A `Break` from `on_accept` ends the sweep
    /// with [`SessionError::Stopped`].
    pub fn run<F>(mut self, mut on_accept: F) -> Result<Report, SessionError>
    where
        F: FnMut(&[LottoNumber; TICKET_SIZE]) -> ControlFlow<()>,
    {
        let total = combination_count(self.pool.len())?;
        info!(
            pool_size = self.pool.len(),
            total,
            even = %self.constraints.even,
            sum = %self.constraints.sum,
            "starting sweep"
        );

        for indices in Combinations::<TICKET_SIZE>::new(self.pool.len()) {
            let ticket = self.pool.resolve(&indices);
            let verdict = self.constraints.evaluate(&ticket);
            self.stats.record(verdict, &indices);
            if verdict == Verdict::Accepted && on_accept(&ticket).is_break() {
                let evaluated = self.stats.evaluated();
                info!(evaluated, total, "sweep stopped by caller");
                return Err(SessionError::Stopped { evaluated, total });
            }
        }

        let evaluated = self.stats.evaluated();
        if evaluated != total {
            return Err(SessionError::CountMismatch { evaluated, total });
        }

        debug!(frequency = ?self.stats.frequency(), "frequency table");
        info!(
            total,
            rejected_even = self.stats.rejected_even(),
            rejected_sum = self.stats.rejected_sum(),
            accepted = self.stats.accepted(),
            "sweep complete"
        );

        Ok(Report {
            pool: self.pool,
            constraints: self.constraints,
            total,
            stats: self.stats,
        })
    }
}

impl Report {
    /// `(number, appearances)` pairs in pool order.
    pub fn frequencies(&self) -> impl Iterator<Item = (LottoNumber, u64)> + '_ {
        self.pool
            .iter()
            .copied()
            .zip(self.stats.frequency().iter().copied())
    }
}
