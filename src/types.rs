//! Core data types for the tree/list engine
//!
//! This module contains the fundamental types shared by every component:
//!
//! - [`Record`] - Trait implemented by each record kind backing a view
//! - [`Node`] - A record plus its per-view state (text cache, visibility, selection)
//! - [`ColumnId`] / [`SortOrder`] / [`SortSpec`] - Column and sort identity
//!
//! # Display Cache
//!
//! Each [`Node`] carries a fixed-size array of `Option<String>` keyed by
//! column index. Cell text is formatted on first request and reused until the
//! owning record is refreshed, at which point the whole row is cleared.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Display text used for records whose name field is semantically empty.
/// Filtering against this literal matches unnamed records.
pub const UNNAMED_TEXT: &str = "(unnamed)";

/// Identifies one column of a view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnId(pub u32);

impl ColumnId {
    /// Index into per-row storage such as the display cache.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction applied to a sorted projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Active sort column and direction. Supplied by the host at initialize time
/// and handed back for persistence at teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: ColumnId,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(column: ColumnId, order: SortOrder) -> Self {
        Self { column, order }
    }
}

/// One record kind backing a view instance.
///
/// Implementations provide the unique key, per-column three-way comparison,
/// and per-column display text. The engine is generic over this trait; the
/// same machinery backs thread lists, import tables, and so on.
pub trait Record: Send + 'static {
    /// Identifier unique within one store (thread id, discovery sequence
    /// number, ...). Also the deterministic sort tie-break.
    type Key: Copy + Eq + Ord + Hash + Send + fmt::Debug + 'static;

    /// Number of columns this record kind renders. Sizes the display cache.
    const COLUMN_COUNT: usize;

    fn key(&self) -> Self::Key;

    /// Three-way comparison on a single column. May report `Equal`; the
    /// engine breaks ties by key.
    fn compare_column(&self, other: &Self, column: ColumnId) -> Ordering;

    /// Format one cell as display text. Called lazily and cached per node.
    fn column_text(&self, column: ColumnId) -> String;

    /// Columns whose text participates in filter matching.
    fn filter_columns() -> &'static [ColumnId];
}

/// A record plus the per-view state the engine maintains for it.
#[derive(Debug, Clone)]
pub struct Node<R: Record> {
    record: R,
    text_cache: Vec<Option<String>>,
    /// Last filter result. Advisory: the consumer skips rendering invisible
    /// nodes, but they remain in the store.
    pub visible: bool,
    /// Owned by the view; never touched by the population pipeline.
    pub selected: bool,
}

impl<R: Record> Node<R> {
    pub fn new(record: R) -> Self {
        Self {
            record,
            text_cache: vec![None; R::COLUMN_COUNT],
            visible: true,
            selected: false,
        }
    }

    #[inline]
    pub fn record(&self) -> &R {
        &self.record
    }

    #[inline]
    pub fn key(&self) -> R::Key {
        self.record.key()
    }

    /// Cell text for `column`, served from the cache when present.
    pub fn cell_text(&mut self, column: ColumnId) -> &str {
        let idx = column.index();
        if idx >= self.text_cache.len() {
            return "";
        }
        if self.text_cache[idx].is_none() {
            self.text_cache[idx] = Some(self.record.column_text(column));
        }
        self.text_cache[idx].as_deref().unwrap_or("")
    }

    /// Mutate the record in place and invalidate the cached row.
    pub fn update<F: FnOnce(&mut R)>(&mut self, f: F) {
        f(&mut self.record);
        self.invalidate_text();
    }

    /// Drop every cached cell for this row.
    pub fn invalidate_text(&mut self) {
        for slot in &mut self.text_cache {
            *slot = None;
        }
    }

    pub fn into_record(self) -> R {
        self.record
    }
}
