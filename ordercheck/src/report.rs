//! Findings and report rendering.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

use crate::types::RequestId;

/// One result of the analysis.
///
/// Findings are advisory. They are the thing the auditor exists to
/// surface, and none of them aborts a run; see [`InputError`] for what
/// does.
///
/// [`InputError`]: crate::InputError
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Finding {
    /// The two files share no request; there is nothing to compare.
    NoIntersection { first: String, second: String },

    /// The two files disagree on the order of their shared requests.
    /// `pair` holds the ids at the first divergent position.
    Unordered {
        first: String,
        second: String,
        pair: (RequestId, RequestId),
        intersection: usize,
    },

    /// The two files agree on the order of their shared requests.
    Ok {
        first: String,
        second: String,
        intersection: usize,
    },

    /// No group token could be recovered from one of the file names, so
    /// the pair was not compared.
    GroupIdMissing { first: String, second: String },

    /// A closed walk in the merged happens-next graph: some request
    /// transitively precedes itself.
    Cycle { path: Vec<RequestId> },

    /// The cycle search finished without finding anything.
    NoCycles,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::NoIntersection { first, second } => {
                write!(f, "NO INTERSECTION {} {}", first, second)
            }

            Finding::Unordered {
                first,
                second,
                pair,
                intersection,
            } => write!(
                f,
                "UNORDERED {} {} intersection_size={} ({}, {})",
                first, second, intersection, pair.0, pair.1
            ),

            Finding::Ok {
                first,
                second,
                intersection,
            } => write!(f, "OK {} {} intersection_size={}", first, second, intersection),

            Finding::GroupIdMissing { first, second } => {
                write!(f, "Could not find group ID in file name {} {}", first, second)
            }

            Finding::Cycle { path } => {
                write!(f, "[")?;
                for (i, id) in path.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", id)?;
                }
                write!(f, "]")
            }

            Finding::NoCycles => write!(f, "No cycles found"),
        }
    }
}

/// Everything one run produced, in emission order.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Pairwise findings, one per reported pair.
    pub order: Vec<Finding>,
    /// Cycle findings: one per discovered cycle, or a single `NoCycles`.
    pub cycles: Vec<Finding>,
}

impl AnalysisReport {
    /// Write the two-phase text report.
    pub fn render(&self, w: &mut impl io::Write) -> io::Result<()> {
        writeln!(w, "Checking for incorrect orders")?;
        for finding in &self.order {
            writeln!(w, "{finding}")?;
        }
        writeln!(w, "Checking for cycles")?;
        if self
            .cycles
            .iter()
            .any(|f| matches!(f, Finding::Cycle { .. }))
        {
            writeln!(w, "Cycles found:")?;
        }
        for finding in &self.cycles {
            writeln!(w, "{finding}")?;
        }
        Ok(())
    }

    /// Count of findings that contradict causal ordering.
    ///
    /// `NoIntersection` and `GroupIdMissing` stay informational; only a
    /// divergent pair or a cycle is a violation.
    pub fn violations(&self) -> usize {
        self.order
            .iter()
            .chain(self.cycles.iter())
            .filter(|f| matches!(f, Finding::Unordered { .. } | Finding::Cycle { .. }))
            .count()
    }
}
