//! View-facing glue: one store, one filter, one sort spec, one pipeline.
//!
//! [`TreeListModel`] is what a host view binds to. It owns the authoritative
//! [`NodeStore`] and answers the view's pull queries (sorted/filtered
//! children, cell text), while the population pipeline pushes records in via
//! the periodic event pump. All model methods run on the consumer's own
//! context; nothing here is shared across threads.

use crate::filter::FilterEngine;
use crate::pipeline::{PopulationPipeline, RecordSource, DEFAULT_DRAIN_INTERVAL};
use crate::selection::{deselect_all, SelectionTracker};
use crate::sort::sort_positions;
use crate::store::NodeStore;
use crate::types::{ColumnId, Node, Record, SortSpec};
use std::time::Duration;

/// Per-instance model configuration, supplied by the host at initialize time
/// (typically restored from its settings store).
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Initial sort column and direction.
    pub sort: SortSpec,
    /// Period between pipeline drain ticks.
    pub drain_interval: Duration,
    /// Placeholder shown while a population pass is outstanding.
    pub loading_text: String,
    /// Placeholder shown once the store is empty and population is done.
    pub empty_text: String,
}

impl ModelConfig {
    pub fn new(sort: SortSpec) -> Self {
        Self {
            sort,
            drain_interval: DEFAULT_DRAIN_INTERVAL,
            loading_text: "Loading...".to_string(),
            empty_text: "There is nothing to display.".to_string(),
        }
    }

    pub fn drain_interval(mut self, interval: Duration) -> Self {
        self.drain_interval = interval;
        self
    }

    pub fn placeholder_text(
        mut self,
        loading: impl Into<String>,
        empty: impl Into<String>,
    ) -> Self {
        self.loading_text = loading.into();
        self.empty_text = empty.into();
        self
    }
}

/// The data model behind one virtualized tree/list view instance.
pub struct TreeListModel<R: Record> {
    store: NodeStore<R>,
    filter: FilterEngine,
    sort: SortSpec,
    pipeline: Option<PopulationPipeline<R>>,
    drain_interval: Duration,
    loading_text: String,
    empty_text: String,
}

impl<R: Record> TreeListModel<R> {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            store: NodeStore::new(),
            filter: FilterEngine::new(),
            sort: config.sort,
            pipeline: None,
            drain_interval: config.drain_interval,
            loading_text: config.loading_text,
            empty_text: config.empty_text,
        }
    }

    pub fn store(&self) -> &NodeStore<R> {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // --- population -------------------------------------------------------

    /// Bind a source and start the one-shot background population pass,
    /// draining on the configured interval.
    ///
    /// Replaces any previous pipeline: its ticker is cancelled and records
    /// still sitting in its buffer are discarded with it.
    pub fn populate<S: RecordSource<R>>(&mut self, source: S) -> crate::error::Result<()> {
        let mut pipeline = PopulationPipeline::new(self.drain_interval);
        pipeline.start(source)?;
        self.pipeline = Some(pipeline);
        Ok(())
    }

    /// Drive the pipeline: process tick/finished events and migrate buffered
    /// records. Returns `true` when structure changed, i.e. the next
    /// [`children`](Self::children) call will see new rows.
    pub fn pump_events(&mut self) -> bool {
        let Some(pipeline) = self.pipeline.as_mut() else {
            return false;
        };
        let before = self.store.len();
        let changed = pipeline.pump(&mut self.store);
        // Newly migrated nodes enter with visible=true; evaluate the active
        // filter over exactly that tail.
        if changed {
            let filter = &self.filter;
            for pos in before..self.store.len() {
                if let Some(node) = self.store.get_mut(pos) {
                    node.visible = filter.is_visible(node.record());
                }
            }
        }
        changed
    }

    /// True while a population pass is outstanding.
    pub fn is_populating(&self) -> bool {
        self.pipeline
            .as_ref()
            .is_some_and(|p| !p.is_finished())
    }

    /// Placeholder text for an empty view: the loading message while a
    /// population pass is outstanding, the nothing-found message otherwise.
    pub fn empty_text(&self) -> &str {
        if self.is_populating() {
            &self.loading_text
        } else {
            &self.empty_text
        }
    }

    // --- direct mutation --------------------------------------------------

    /// Insert a record synchronously. Duplicate keys are rejected
    /// (first writer wins); returns whether the record was inserted.
    pub fn add(&mut self, record: R) -> bool {
        let visible = self.filter.is_visible(&record);
        if !self.store.add(record) {
            return false;
        }
        let pos = self.store.len() - 1;
        if let Some(node) = self.store.get_mut(pos) {
            node.visible = visible;
        }
        true
    }

    /// Mutate a record in place (counter/text refresh). Invalidates its
    /// cached display row and re-evaluates its visibility.
    pub fn refresh<F: FnOnce(&mut R)>(&mut self, key: &R::Key, f: F) -> bool {
        let filter = &self.filter;
        match self.store.find_mut(key) {
            Some(node) => {
                node.update(f);
                node.visible = filter.is_visible(node.record());
                true
            }
            None => false,
        }
    }

    /// Remove one record by key. Both indexes update in the same call.
    pub fn remove(&mut self, key: &R::Key) -> Option<R> {
        self.store.remove(key)
    }

    /// Drop every record, e.g. ahead of re-enumerating the source.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    // --- projection -------------------------------------------------------

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    pub fn set_sort_spec(&mut self, spec: SortSpec) {
        self.sort = spec;
    }

    pub fn filter_text(&self) -> &str {
        self.filter.text()
    }

    /// Change the filter text and recompute every node's visibility flag.
    /// No records are added, removed, or reordered.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        if !self.filter.set_text(text) {
            return;
        }
        let filter = &self.filter;
        for pos in 0..self.store.len() {
            if let Some(node) = self.store.get_mut(pos) {
                node.visible = filter.is_visible(node.record());
            }
        }
    }

    /// Currently visible nodes in display order. The sort is recomputed
    /// fresh on every call.
    pub fn children(&self) -> Vec<&Node<R>> {
        let mut positions: Vec<usize> = (0..self.store.len())
            .filter(|&pos| self.store.as_slice()[pos].visible)
            .collect();
        sort_positions(&self.store, &mut positions, self.sort);
        positions
            .into_iter()
            .map(|pos| &self.store.as_slice()[pos])
            .collect()
    }

    /// Cell text for one record, served from its display cache.
    pub fn cell_text(&mut self, key: &R::Key, column: ColumnId) -> Option<&str> {
        self.store.find_mut(key).map(|node| node.cell_text(column))
    }

    // --- selection --------------------------------------------------------

    /// Set or clear the selection flag on one record.
    pub fn select(&mut self, key: &R::Key, selected: bool) -> bool {
        match self.store.find_mut(key) {
            Some(node) => {
                node.selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn selected_keys(&self) -> Vec<R::Key> {
        SelectionTracker::new(&self.store).keys()
    }

    pub fn selected_count(&self) -> usize {
        SelectionTracker::new(&self.store).count()
    }

    pub fn first_selected(&self) -> Option<&R> {
        SelectionTracker::new(&self.store).first()
    }

    pub fn clear_selection(&mut self) {
        deselect_all(&mut self.store);
    }
}
