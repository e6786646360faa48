use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use lotto_core::session::{Report, Session, SessionError};

use crate::config::OutputConfig;
use crate::plan::RunPlan;
use crate::report::{ReportError, write_summary, write_summary_json, write_ticket};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// What a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: Report,
    pub summary_json: Option<PathBuf>,
}

/// Sweep the plan, streaming accepted tickets and the final summary to `out`.
pub fn execute<W: Write>(
    plan: RunPlan,
    output: &OutputConfig,
    out: &mut W,
) -> Result<RunOutcome, RunError> {
    let session = Session::new(plan.pool, plan.constraints)?;

    let mut write_failure: Option<io::Error> = None;
    let swept = session.run(|ticket| {
        if !output.print_combinations {
            return ControlFlow::Continue(());
        }
        match write_ticket(out, ticket) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                warn!(error = %err, "stopping sweep, output is gone");
                write_failure = Some(err);
                ControlFlow::Break(())
            }
        }
    });
    if let Some(err) = write_failure {
        return Err(RunError::Output(err));
    }
    let report = swept?;

    write_summary(out, &report)?;
    out.flush()?;

    let summary_json = match output.summary_json_path() {
        Some(path) => {
            let written = write_summary_json(&path, &report)?;
            info!(path = %written.display(), "summary JSON written");
            Some(written)
        }
        None => None,
    };

    Ok(RunOutcome {
        report,
        summary_json,
    })
}
