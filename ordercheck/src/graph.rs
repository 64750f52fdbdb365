//! The merged happens-next graph.

use std::collections::HashMap;

use crate::types::{ParsedLog, RequestId};

/// Union of per-replica adjacencies: an edge `a -> b` means some replica
/// handled `b` directly after `a`.
///
/// Keys and successor lists keep first-insertion order, so traversal is
/// deterministic for a fixed input order. Every id appearing in any
/// sequence is a key; an id never seen with a successor maps to an empty
/// list. A successor list never repeats an id, however many replicas
/// contributed the same adjacency.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SuccessorGraph {
    next: HashMap<RequestId, Vec<RequestId>>,
    insertion: Vec<RequestId>,
}

impl SuccessorGraph {
    /// Merge the adjacencies of all given sequences into one graph.
    pub fn from_logs(logs: &[ParsedLog]) -> SuccessorGraph {
        let mut graph = SuccessorGraph::default();
        for log in logs {
            for window in log.requests.windows(2) {
                graph.add_edge(&window[0], &window[1]);
            }
            // the final id has no successor here but is still a node
            if let Some(last) = log.requests.last() {
                graph.slot(last);
            }
        }
        tracing::debug!(target: "graph", nodes = graph.len());
        graph
    }

    fn add_edge(&mut self, from: &RequestId, to: &RequestId) {
        let next = self.slot(from);
        if !next.contains(to) {
            next.push(to.clone());
        }
    }

    fn slot(&mut self, id: &RequestId) -> &mut Vec<RequestId> {
        if !self.next.contains_key(id) {
            self.insertion.push(id.clone());
        }
        self.next.entry(id.clone()).or_default()
    }

    /// Nodes in first-insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &RequestId> {
        self.insertion.iter()
    }

    /// Successors of `id` in first-insertion order; empty for ids that
    /// never had one and for ids not in the graph.
    pub fn successors(&self, id: &RequestId) -> &[RequestId] {
        self.next.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: &RequestId) -> bool {
        self.next.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.insertion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insertion.is_empty()
    }
}
