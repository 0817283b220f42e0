//! Queries over the per-node `selected` flag.
//!
//! Selection is owned and mutated by the view; this module is a thin query
//! surface over it in store (insertion) order. It has no effect on sort or
//! filter state.

use crate::store::NodeStore;
use crate::types::Record;

/// Borrowing query surface over the current selection.
pub struct SelectionTracker<'a, R: Record> {
    store: &'a NodeStore<R>,
}

impl<'a, R: Record> SelectionTracker<'a, R> {
    pub fn new(store: &'a NodeStore<R>) -> Self {
        Self { store }
    }

    /// Keys of all selected records, in store order.
    pub fn keys(&self) -> Vec<R::Key> {
        self.store
            .iter()
            .filter(|n| n.selected)
            .map(|n| n.key())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.store.iter().filter(|n| n.selected).count()
    }

    /// The first selected record in store order, if any.
    pub fn first(&self) -> Option<&'a R> {
        self.store
            .iter()
            .find(|n| n.selected)
            .map(|n| n.record())
    }
}

/// Clear the `selected` flag on every node.
pub fn deselect_all<R: Record>(store: &mut NodeStore<R>) {
    for node in store.iter_mut() {
        node.selected = false;
    }
}
