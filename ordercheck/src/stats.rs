//! Client latency summaries.
//!
//! The engine's clients write one tab-separated stats file per run, a
//! header row naming the columns, then one row per completed request.
//! Only the `LATENCY` column matters here; the rest ride along.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::InputError;

pub const LATENCY_COLUMN: &str = "LATENCY";

/// Totals accumulated across one or more stats files.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct LatencySummary {
    pub total_latency: i64,
    pub entries: usize,
}

impl LatencySummary {
    /// Mean latency, or `None` when no rows were seen.
    pub fn average(&self) -> Option<f64> {
        if self.entries == 0 {
            None
        } else {
            Some(self.total_latency as f64 / self.entries as f64)
        }
    }
}

/// Sum the latency column across stats files.
///
/// Every file must carry the `LATENCY` column in its header; a row whose
/// value does not parse as an integer is a fatal input error, not skipped
/// data. Blank lines are ignored.
pub fn summarize_latency(paths: &[PathBuf]) -> Result<LatencySummary, InputError> {
    let mut summary = LatencySummary::default();
    for path in paths {
        accumulate_file(path, &mut summary)?;
    }
    tracing::debug!(target: "stats", entries = summary.entries, total = summary.total_latency);
    Ok(summary)
}

fn accumulate_file(path: &Path, summary: &mut LatencySummary) -> Result<(), InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let missing_column = || InputError::MissingColumn {
        path: path.to_path_buf(),
        column: LATENCY_COLUMN.to_string(),
    };

    let mut lines = text.lines().enumerate();
    let column = match lines.next() {
        Some((_, header)) => header
            .split('\t')
            .position(|name| name.trim() == LATENCY_COLUMN)
            .ok_or_else(missing_column)?,
        None => return Err(missing_column()),
    };

    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let value = line
            .split('\t')
            .nth(column)
            .and_then(|field| field.trim().parse::<i64>().ok())
            .ok_or_else(|| InputError::MalformedValue {
                path: path.to_path_buf(),
                line: idx + 1,
                column: LATENCY_COLUMN.to_string(),
            })?;
        summary.total_latency += value;
        summary.entries += 1;
    }
    Ok(())
}
