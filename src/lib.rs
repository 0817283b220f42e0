//! Data-model engine for virtualized tree/list views.
//!
//! The crate owns everything between a record producer and a host view:
//! a keyed node store with stable insertion order, lazy per-cell display
//! text, free-text filtering, single-column sorting with a deterministic
//! tie-break, a selection surface, and a background population pipeline
//! that stages records off-thread and drains them on a fixed tick.
//!
//! The host binds one [`TreeListModel`] per view instance, drives
//! [`TreeListModel::pump_events`] from its frame/timer loop, and pulls the
//! visible rows via [`TreeListModel::children`]. Records are anything
//! implementing [`Record`]; two ready-made kinds live in [`records`].
//!
//! # Example
//!
//! ```
//! use treelist::records::{ImportColumn, ImportRecord};
//! use treelist::{ModelConfig, SortOrder, SortSpec, TreeListModel};
//!
//! let config = ModelConfig::new(SortSpec::new(
//!     ImportColumn::Index.id(),
//!     SortOrder::Ascending,
//! ));
//! let mut model = TreeListModel::new(config);
//!
//! model.add(ImportRecord::by_name(1, 0x2f40, "kernel32.dll", "CreateFileW", 120));
//! model.add(ImportRecord::by_ordinal(2, 0x2f48, "comctl32.dll", 17));
//!
//! model.set_filter_text("kernel");
//! assert_eq!(model.children().len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod pipeline;
pub mod records;
pub mod selection;
pub mod sort;
pub mod store;
pub mod types;

pub use config::{ColumnLayout, ViewSettings};
pub use error::{Result, TreeListError};
pub use filter::{FilterEngine, FILTER_DELIMITER};
pub use model::{ModelConfig, TreeListModel};
pub use pipeline::{
    PipelineEvent, PipelinePhase, PopulationPipeline, RecordSink, RecordSource,
    DEFAULT_DRAIN_INTERVAL,
};
pub use selection::SelectionTracker;
pub use sort::{compare_records, modify_sort, sort_positions};
pub use store::NodeStore;
pub use types::{ColumnId, Node, Record, SortOrder, SortSpec, UNNAMED_TEXT};
