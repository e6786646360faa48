use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use lotto_core::combo::TICKET_SIZE;
use lotto_core::model::LottoNumber;
use lotto_core::session::Report;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode summary JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One accepted ticket per line, numbers separated by single spaces.
pub fn write_ticket<W: Write>(out: &mut W, ticket: &[LottoNumber; TICKET_SIZE]) -> io::Result<()> {
    let mut first = true;
    for number in ticket {
        if !first {
            out.write_all(b" ")?;
        }
        write!(out, "{number}")?;
        first = false;
    }
    out.write_all(b"\n")
}

pub fn write_summary<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let stats = &report.stats;
    writeln!(out)?;
    writeln!(out, "Total possible combinations: {}", report.total)?;
    writeln!(out, "Rejected by even-number constraint: {}", stats.rejected_even())?;
    writeln!(out, "Rejected by sum constraint: {}", stats.rejected_sum())?;
    writeln!(out, "Valid combinations found: {}", stats.accepted())?;
    for (number, count) in report.frequencies() {
        writeln!(out, "Number {number} appeared {count} times")?;
    }
    Ok(())
}

/// Machine-readable form of a finished sweep.
#[derive(Debug, Serialize)]
pub struct SummaryDocument {
    pub pool: Vec<u8>,
    pub even: [u8; 2],
    pub sum: [u16; 2],
    pub total: u64,
    pub rejected_even: u64,
    pub rejected_sum: u64,
    pub accepted: u64,
    pub frequency: BTreeMap<u8, u64>,
}

impl SummaryDocument {
    pub fn from_report(report: &Report) -> Self {
        let constraints = &report.constraints;
        Self {
            pool: report.pool.iter().map(|n| n.value()).collect(),
            even: [constraints.even.lower(), constraints.even.upper()],
            sum: [constraints.sum.lower(), constraints.sum.upper()],
            total: report.total,
            rejected_even: report.stats.rejected_even(),
            rejected_sum: report.stats.rejected_sum(),
            accepted: report.stats.accepted(),
            frequency: report
                .frequencies()
                .map(|(number, count)| (number.value(), count))
                .collect(),
        }
    }
}

pub fn write_summary_json(path: &Path, report: &Report) -> Result<PathBuf, ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            context: "creating summary directory",
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| ReportError::Io {
        context: "creating summary JSON",
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &SummaryDocument::from_report(report))?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|source| ReportError::Io {
            context: "writing summary JSON",
            source,
        })?;
    Ok(path.to_path_buf())
}
