//! The authoritative record collection behind one view instance.
//!
//! [`NodeStore`] owns every live node and keeps two views of it: a `Vec` in
//! insertion order (the default enumeration) and a `HashMap` from unique key
//! to position (O(1) lookup). Both live behind one type and every mutation
//! updates them in the same method, so they cannot diverge.
//!
//! The store performs no I/O and sends no notifications; callers decide when
//! a structural change requires re-sorting or redrawing.

use crate::types::{Node, Record};
use std::collections::HashMap;

/// Dual-indexed node store: insertion-ordered `Vec` + key hash index.
#[derive(Debug)]
pub struct NodeStore<R: Record> {
    nodes: Vec<Node<R>>,
    index: HashMap<R::Key, usize>,
}

impl<R: Record> Default for NodeStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> NodeStore<R> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a record. Returns `false` (and discards the record) if the key
    /// is already present: first writer wins.
    pub fn add(&mut self, record: R) -> bool {
        let key = record.key();
        if self.index.contains_key(&key) {
            tracing::debug!(?key, "duplicate key rejected");
            return false;
        }
        self.index.insert(key, self.nodes.len());
        self.nodes.push(Node::new(record));
        true
    }

    pub fn contains(&self, key: &R::Key) -> bool {
        self.index.contains_key(key)
    }

    /// O(1) expected lookup by unique key.
    pub fn find(&self, key: &R::Key) -> Option<&Node<R>> {
        self.index.get(key).and_then(|&pos| self.nodes.get(pos))
    }

    pub fn find_mut(&mut self, key: &R::Key) -> Option<&mut Node<R>> {
        let pos = *self.index.get(key)?;
        self.nodes.get_mut(pos)
    }

    /// Node at an insertion-order position.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&Node<R>> {
        self.nodes.get(pos)
    }

    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut Node<R>> {
        self.nodes.get_mut(pos)
    }

    /// All nodes in insertion order (not display order).
    pub fn iter(&self) -> impl Iterator<Item = &Node<R>> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node<R>> {
        self.nodes.iter_mut()
    }

    /// Insertion-order slice view, used by the sort engine.
    pub fn as_slice(&self) -> &[Node<R>] {
        &self.nodes
    }

    /// Remove by key, preserving the relative order of the remaining nodes.
    /// Returns the record, or `None` if the key is absent.
    pub fn remove(&mut self, key: &R::Key) -> Option<R> {
        let pos = self.index.remove(key)?;
        let node = self.nodes.remove(pos);
        // Positions after the removal point shifted down by one.
        for (i, n) in self.nodes.iter().enumerate().skip(pos) {
            if let Some(slot) = self.index.get_mut(&n.key()) {
                *slot = i;
            }
        }
        Some(node.into_record())
    }

    /// Release every record and empty both indexes. Used before a source is
    /// re-enumerated from scratch.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }
}
