use std::io::{BufRead, Write};

use tracing::info;

use lotto_core::filter::Constraints;
use lotto_core::model::{Bounds, Pool};

use crate::config::FilterConfig;
use crate::prompt::{PromptError, Prompter};

/// Pool and filter windows, ready for a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub pool: Pool,
    pub constraints: Constraints,
}

enum PoolSource {
    Ready(Pool),
    Prompt(usize),
}

/// Fill the plan from a validated config, prompting for whatever it leaves
/// out. The questions come in the classic order: pool size, even window, sum
/// window, then the numbers themselves.
pub fn resolve_plan<R, W>(
    config: &FilterConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<RunPlan, PromptError>
where
    R: BufRead,
    W: Write,
{
    let source = match (config.pool.as_ref(), config.quick_pick.as_ref()) {
        (Some(values), _) => PoolSource::Ready(Pool::new(values.iter().copied())?),
        (None, Some(quick_pick)) => PoolSource::Ready(quick_pick.draw()?),
        (None, None) => PoolSource::Prompt(prompter.ask_pool_size()?),
    };

    let even = match config.even.as_ref() {
        Some(even) => Bounds::even_count(even.min, even.max)?,
        None => prompter.ask_even_bounds()?,
    };
    let sum = match config.sum.as_ref() {
        Some(sum) => Bounds::sum(sum.min, sum.max)?,
        None => prompter.ask_sum_bounds()?,
    };

    let pool = match source {
        PoolSource::Ready(pool) => pool,
        PoolSource::Prompt(size) => Pool::new(prompter.ask_numbers(size)?)?,
    };

    info!(pool_size = pool.len(), %even, %sum, "run plan resolved");
    Ok(RunPlan {
        pool,
        constraints: Constraints::new(even, sum),
    })
}
