//! Sort dispatch with deterministic tie-breaking.
//!
//! The primary comparison comes from [`Record::compare_column`]. Whenever it
//! reports `Equal`, an ascending comparison on the unique key is applied
//! before the requested direction flips the combined result. That gives a
//! total order even when the sorted column holds duplicate values, and makes
//! re-sorts stable relative to key rather than prior screen position.
//!
//! Sorting is recomputed in full on every projection request; population
//! sizes are bounded to thousands, so O(n log n) per request is fine.

use crate::store::NodeStore;
use crate::types::{Record, SortOrder, SortSpec};
use std::cmp::Ordering;

/// Apply the sort direction to a combined comparison result.
#[inline]
pub fn modify_sort(result: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => result,
        SortOrder::Descending => result.reverse(),
    }
}

/// Total-order comparison of two records under a sort spec.
pub fn compare_records<R: Record>(a: &R, b: &R, spec: SortSpec) -> Ordering {
    let tied = a
        .compare_column(b, spec.column)
        .then_with(|| a.key().cmp(&b.key()));
    modify_sort(tied, spec.order)
}

/// Sort insertion-order positions into display order.
pub fn sort_positions<R: Record>(store: &NodeStore<R>, positions: &mut [usize], spec: SortSpec) {
    let nodes = store.as_slice();
    positions.sort_by(|&a, &b| compare_records(nodes[a].record(), nodes[b].record(), spec));
}
