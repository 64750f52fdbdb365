//! # ByzCast Log Auditor
//!
//! Offline causal-order auditing for the logs of a multi-group Byzantine
//! fault-tolerant broadcast engine. Each replica writes one milestone
//! line per request at the moment the request is handled locally; this
//! crate reduces every log to that sequence and checks two things:
//!
//! - **Pairwise order agreement**: replicas from different groups must
//!   order their shared requests identically, since both sequences are
//!   projections of one global causal order (the happens-before relation
//!   the broadcast protocol promises to preserve).
//! - **Acyclicity**: the union of all "handled directly after" relations
//!   across every log must contain no cycle; a cycle means some request
//!   transitively precedes itself, a causality contradiction.
//!
//! ## Implementation Structure
//!
//! - `types.rs`: request/group identifiers and the parsed-log record
//! - `config.rs`: overridable extraction patterns
//! - `parse.rs`: milestone extraction from raw log text
//! - `order.rs`: pairwise order comparison
//! - `graph.rs`: the merged happens-next graph
//! - `cycle.rs`: iterative cycle search
//! - `report.rs`: findings and report rendering
//! - `analysis.rs`: the driver tying the stages together
//! - `stats.rs`: client latency summaries
//! - `cachecheck.rs`: batch cache lifecycle check
//! - `test_harness.rs`: synthetic engine-log builders for tests
//!
//! Disagreements and cycles are findings, not errors: a run aborts only
//! when an input cannot be read at all.

mod analysis;
mod config;
mod cycle;
mod error;
mod graph;
mod order;
mod parse;
mod report;
mod types;

// Public modules
pub mod cachecheck;
pub mod stats;
pub mod test_harness;

// Public re-exports
pub use analysis::{check_cycles, check_order_pairs, discover_log_files, run_analysis};
pub use config::{AnalysisConfig, Patterns};
pub use cycle::find_cycles;
pub use error::InputError;
pub use graph::SuccessorGraph;
pub use order::{OrderAgreement, compare_orders};
pub use parse::{extract_group_id, extract_requests, parse_log_file};
pub use report::{AnalysisReport, Finding};
pub use types::{GroupId, ParsedLog, RequestId};
