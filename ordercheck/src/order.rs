//! Pairwise delivery-order comparison.

use std::collections::HashSet;

use crate::types::RequestId;

/// Outcome of comparing two replicas' delivery sequences.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum OrderAgreement {
    /// The sequences share no request at all.
    NoIntersection,
    /// Restricted to shared requests, the sequences disagree. `pair`
    /// holds the two ids at the first position where they differ.
    Diverged {
        pair: (RequestId, RequestId),
        common: usize,
    },
    /// Restricted to shared requests, the sequences agree.
    Agreed { common: usize },
}

/// Compare two delivery sequences on the requests they share.
///
/// Both sequences are projected onto their common ids, order kept, and
/// walked element-wise up to the shorter projection's length; the first
/// mismatch is the divergent pair. Replicas of two correct groups must
/// never diverge here, since both orders are projections of one global
/// causal order.
pub fn compare_orders(a: &[RequestId], b: &[RequestId]) -> OrderAgreement {
    let set_a: HashSet<&RequestId> = a.iter().collect();
    let set_b: HashSet<&RequestId> = b.iter().collect();
    let shared: HashSet<&RequestId> = set_a.intersection(&set_b).copied().collect();
    if shared.is_empty() {
        return OrderAgreement::NoIntersection;
    }
    let common = shared.len();

    let filtered_a: Vec<&RequestId> = a.iter().filter(|r| shared.contains(r)).collect();
    let filtered_b: Vec<&RequestId> = b.iter().filter(|r| shared.contains(r)).collect();

    for (x, y) in filtered_a.iter().zip(filtered_b.iter()) {
        if x != y {
            tracing::debug!(target: "order", first = %x, second = %y);
            return OrderAgreement::Diverged {
                pair: ((*x).clone(), (*y).clone()),
                common,
            };
        }
    }
    OrderAgreement::Agreed { common }
}
