//! The analysis driver: discovery, pairwise checks, cycle search.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{AnalysisConfig, Patterns};
use crate::cycle::find_cycles;
use crate::error::InputError;
use crate::graph::SuccessorGraph;
use crate::order::{OrderAgreement, compare_orders};
use crate::parse::{extract_group_id, parse_log_file};
use crate::report::{AnalysisReport, Finding};
use crate::types::ParsedLog;

/// Regular files directly under `base` whose name ends with the
/// configured suffix, sorted lexicographically. Subdirectories are not
/// entered.
pub fn discover_log_files(
    base: &Path,
    config: &AnalysisConfig,
) -> Result<Vec<PathBuf>, InputError> {
    if !base.is_dir() {
        return Err(InputError::NotADirectory {
            path: base.to_path_buf(),
        });
    }
    let entries = fs::read_dir(base).map_err(|source| InputError::Io {
        path: base.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| InputError::Io {
            path: base.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_log = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(&config.log_suffix));
        if is_log && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Run the full audit over one directory of replica logs.
///
/// Findings come out in deterministic order: pair findings follow the
/// sorted file list, cycle findings follow graph insertion order. Domain
/// findings never abort the run; only an [`InputError`] does.
pub fn run_analysis(base: &Path, config: &AnalysisConfig) -> Result<AnalysisReport, InputError> {
    let patterns = config.compile()?;
    let files = discover_log_files(base, config)?;
    tracing::info!("auditing {} log files under {}", files.len(), base.display());

    let mut logs = Vec::with_capacity(files.len());
    for path in &files {
        logs.push(parse_log_file(path, &patterns)?);
    }

    Ok(AnalysisReport {
        order: check_order_pairs(&logs, &patterns),
        cycles: check_cycles(&logs),
    })
}

/// Pairwise order findings over every file pair, in sorted-file order.
///
/// Pairs where a group token is missing from either name are reported as
/// [`Finding::GroupIdMissing`] and not compared. Same-group pairs are
/// skipped without a finding: replicas of one group run the same ordered
/// broadcast and agree trivially.
pub fn check_order_pairs(logs: &[ParsedLog], patterns: &Patterns) -> Vec<Finding> {
    let mut findings = Vec::new();
    for i in 0..logs.len() {
        for j in i + 1..logs.len() {
            let first = &logs[i];
            let second = &logs[j];

            let groups = (
                extract_group_id(&first.source_name, patterns),
                extract_group_id(&second.source_name, patterns),
            );
            let (group_a, group_b) = match groups {
                (Some(a), Some(b)) => (a, b),
                _ => {
                    findings.push(Finding::GroupIdMissing {
                        first: first.source_name.clone(),
                        second: second.source_name.clone(),
                    });
                    continue;
                }
            };
            if group_a == group_b {
                continue;
            }

            findings.push(match compare_orders(&first.requests, &second.requests) {
                OrderAgreement::NoIntersection => Finding::NoIntersection {
                    first: first.source_name.clone(),
                    second: second.source_name.clone(),
                },
                OrderAgreement::Diverged { pair, common } => Finding::Unordered {
                    first: first.source_name.clone(),
                    second: second.source_name.clone(),
                    pair,
                    intersection: common,
                },
                OrderAgreement::Agreed { common } => Finding::Ok {
                    first: first.source_name.clone(),
                    second: second.source_name.clone(),
                    intersection: common,
                },
            });
        }
    }
    findings
}

/// Merge every log (same-group included) into one graph and search it.
/// One finding per cycle, or a single [`Finding::NoCycles`].
pub fn check_cycles(logs: &[ParsedLog]) -> Vec<Finding> {
    let graph = SuccessorGraph::from_logs(logs);
    let cycles = find_cycles(&graph);
    if cycles.is_empty() {
        return vec![Finding::NoCycles];
    }
    tracing::warn!("found {} cycles in the happens-next graph", cycles.len());
    cycles
        .into_iter()
        .map(|path| Finding::Cycle { path })
        .collect()
}
