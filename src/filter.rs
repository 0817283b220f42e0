//! Substring/multi-term filter predicate.
//!
//! Filter text is split on `'|'` into terms. A record is visible if ANY
//! non-empty term occurs as a case-insensitive substring of ANY of the
//! record's filterable columns. Empty filter text makes everything visible.
//!
//! Filtering never removes or reorders records; it only computes the
//! advisory `visible` flag the consumer uses to skip rendering.

use crate::types::Record;

/// Delimiter separating OR-terms in the filter text.
pub const FILTER_DELIMITER: char = '|';

/// Holds the current filter text and its pre-lowered terms.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    text: String,
    terms: Vec<String>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the filter text. Returns `true` if the text changed, meaning
    /// visibility flags are stale and need recomputing.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.terms = text
            .split(FILTER_DELIMITER)
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect();
        self.text = text;
        true
    }

    /// True if any term matches `candidate` case-insensitively.
    ///
    /// Note this is the per-column predicate: it does not special-case empty
    /// filter text (a text of just delimiters has no terms and matches
    /// nothing). The empty-filter shortcut lives in [`FilterEngine::is_visible`].
    pub fn matches(&self, candidate: &str) -> bool {
        if self.terms.is_empty() {
            return false;
        }
        let candidate = candidate.to_lowercase();
        self.terms.iter().any(|term| candidate.contains(term))
    }

    /// Evaluate visibility for one record across its filterable columns.
    pub fn is_visible<R: Record>(&self, record: &R) -> bool {
        if self.text.is_empty() {
            return true;
        }
        R::filter_columns()
            .iter()
            .any(|&column| self.matches(&record.column_text(column)))
    }
}
