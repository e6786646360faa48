pub mod counter;
pub mod enumerator;

pub use counter::{CountError, TICKET_SIZE, binomial, combination_count};
pub use enumerator::Combinations;
