//! Cycle search over the happens-next graph.

use std::collections::HashSet;

use crate::graph::SuccessorGraph;
use crate::types::RequestId;

/// Enumerate cycles by iterative depth-first search.
///
/// Each result is a closed walk with its entry node repeated at the end,
/// e.g. `[a, b, c, a]`. A node's out-edges are expanded from exactly one
/// initiating start node; once globally visited it is never expanded
/// again, so a cycle reachable only through a different traversal order
/// can go unreported. Every cycle returned is real, but an empty result
/// is not a proof of acyclicity. Deterministic for a fixed graph.
pub fn find_cycles(graph: &SuccessorGraph) -> Vec<Vec<RequestId>> {
    let mut cycles = Vec::new();
    let mut visited: HashSet<&RequestId> = HashSet::new();

    for start in graph.nodes() {
        if visited.contains(start) {
            continue;
        }
        let mut stack: Vec<(&RequestId, Vec<&RequestId>)> = vec![(start, vec![start])];
        while let Some((node, path)) = stack.pop() {
            if visited.contains(node) {
                continue;
            }
            visited.insert(node);
            for succ in graph.successors(node) {
                if let Some(pos) = path.iter().position(|p| *p == succ) {
                    // closed walk from the successor's first occurrence
                    let mut cycle: Vec<RequestId> =
                        path[pos..].iter().map(|r| (*r).clone()).collect();
                    cycle.push(succ.clone());
                    tracing::debug!(target: "cycle", at = %succ, len = cycle.len());
                    cycles.push(cycle);
                } else {
                    let mut next_path = path.clone();
                    next_path.push(succ);
                    stack.push((succ, next_path));
                }
            }
        }
    }
    cycles
}
