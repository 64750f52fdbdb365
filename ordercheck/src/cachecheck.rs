//! Batch cache lifecycle check for a single request id.
//!
//! A replica that receives a batch it has not seen logs
//! `Request not found in cache`, fetches it, and later logs
//! `All requests found in cache` once the batch is complete. For any one
//! id those two events must strictly alternate, pending first, and no
//! pending may be left open at end of file. Lines that do not mention
//! the id (bracketed, as the engine prints batch contents) are ignored.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// The two phrases whose alternation is checked. Overridable the same
/// way the milestone patterns are, for older engine vocabularies.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BatchPhrases {
    pub pending: String,
    pub complete: String,
}

impl Default for BatchPhrases {
    fn default() -> Self {
        BatchPhrases {
            pending: "Request not found in cache".to_string(),
            complete: "All requests found in cache".to_string(),
        }
    }
}

/// Verdict for one file and one tracked id.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BatchLifecycle {
    /// Pending and completion events alternate correctly.
    Clean,
    /// A completion with no pending event before it, at this 1-based
    /// line.
    CompletedWithoutPending { line: usize },
    /// A pending event was never completed.
    PendingAtEof,
}

impl BatchLifecycle {
    pub fn is_clean(&self) -> bool {
        matches!(self, BatchLifecycle::Clean)
    }
}

/// Check the pending/completion alternation for `id` in raw log text.
///
/// Consecutive pending events collapse into one; the first completion
/// without an open pending decides the verdict.
pub fn check_batch_lifecycle(text: &str, id: &str, phrases: &BatchPhrases) -> BatchLifecycle {
    let needle = format!("[{id}]");
    let mut pending = false;

    for (idx, line) in text.lines().enumerate() {
        if !line.contains(&needle) {
            continue;
        }
        if line.contains(&phrases.pending) {
            pending = true;
        } else if line.contains(&phrases.complete) {
            if pending {
                pending = false;
            } else {
                return BatchLifecycle::CompletedWithoutPending { line: idx + 1 };
            }
        }
    }

    if pending {
        BatchLifecycle::PendingAtEof
    } else {
        BatchLifecycle::Clean
    }
}

/// File-reading wrapper around [`check_batch_lifecycle`].
pub fn check_batch_file(
    path: &Path,
    id: &str,
    phrases: &BatchPhrases,
) -> Result<BatchLifecycle, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let verdict = check_batch_lifecycle(&text, id, phrases);
    tracing::debug!(target: "cachecheck", file = %path.display(), verdict = ?verdict);
    Ok(verdict)
}
