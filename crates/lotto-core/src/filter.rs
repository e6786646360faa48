use serde::Serialize;

use crate::combo::TICKET_SIZE;
use crate::model::{Bounds, LottoNumber};

/// Outcome of running one ticket through the filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    RejectedEven,
    RejectedSum,
    Accepted,
}

/// The two acceptance windows a ticket must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Constraints {
    pub even: Bounds<u8>,
    pub sum: Bounds<u16>,
}

impl Constraints {
    pub fn new(even: Bounds<u8>, sum: Bounds<u16>) -> Self {
        Self { even, sum }
    }

    /// Accepts every ticket.
    pub fn widest() -> Self {
        Self::new(Bounds::widest_even_count(), Bounds::widest_sum())
    }

    /// Classify a ticket. The even-count filter runs first; a ticket that fails
    /// it is never checked against the sum window.
    pub fn evaluate(&self, ticket: &[LottoNumber; TICKET_SIZE]) -> Verdict {
        let evens = ticket.iter().filter(|number| number.is_even()).count() as u8;
        if !self.even.contains(evens) {
            return Verdict::RejectedEven;
        }

        let sum: u16 = ticket.iter().map(|number| u16::from(number.value())).sum();
        if !self.sum.contains(sum) {
            return Verdict::RejectedSum;
        }

        Verdict::Accepted
    }
}
