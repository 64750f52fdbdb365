//! Milestone extraction from replica logs.
//!
//! A replica writes one line per request at the point the request is
//! handled locally, i.e. delivered in that replica's order. Those lines
//! are the only ones the auditor reads; everything else in the log is
//! skipped without comment.

use std::fs;
use std::path::Path;

use crate::config::Patterns;
use crate::error::InputError;
use crate::types::{GroupId, ParsedLog, RequestId};

/// Pull the milestone sequence out of raw log text.
///
/// Each line matching the milestone pattern contributes its captured id,
/// in line order. A file of pure noise yields an empty sequence, not an
/// error.
pub fn extract_requests(text: &str, patterns: &Patterns) -> Vec<RequestId> {
    let mut requests = Vec::new();
    for line in text.lines() {
        if let Some(caps) = patterns.milestone.captures(line) {
            // group 1 is the id token by construction of the pattern
            if let Some(m) = caps.get(1) {
                requests.push(RequestId(m.as_str().to_string()));
            }
        }
    }
    requests
}

/// Read one log file and reduce it to its milestone sequence.
///
/// The file handle is dropped as soon as the content is in memory.
pub fn parse_log_file(path: &Path, patterns: &Patterns) -> Result<ParsedLog, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let requests = extract_requests(&text, patterns);
    tracing::debug!(target: "parse", file = %path.display(), milestones = requests.len());
    Ok(ParsedLog {
        source_name: path.display().to_string(),
        requests,
    })
}

/// First group token in a file name, if any.
///
/// Only the final path component is searched. A base directory that
/// happens to contain a group-like token must not tag every file under
/// it with that group.
pub fn extract_group_id(source_name: &str, patterns: &Patterns) -> Option<GroupId> {
    let name = Path::new(source_name).file_name()?.to_str()?;
    patterns
        .group
        .find(name)
        .map(|m| GroupId(m.as_str().to_string()))
}
