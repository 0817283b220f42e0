//! View settings exchanged with the host's settings store.
//!
//! The engine does not read or write any storage. At initialize time the
//! host hands it a [`SortSpec`] restored from settings; at teardown it reads
//! the current value back. [`ViewSettings`] bundles that with the column
//! layout so hosts can persist one value per view instance. JSON helpers are
//! provided for hosts that want them; the storage format stays the host's
//! business.

use crate::error::{Result, TreeListError};
use crate::types::{ColumnId, SortSpec};
use serde::{Deserialize, Serialize};

/// Layout of one column as the host last displayed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub column: ColumnId,
    pub width: u32,
    pub visible: bool,
}

/// Everything a host persists per view instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub columns: Vec<ColumnLayout>,
    pub sort: SortSpec,
}

impl ViewSettings {
    pub fn new(sort: SortSpec) -> Self {
        Self {
            columns: Vec::new(),
            sort,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| TreeListError::Config(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TreeListError::Config(e.to_string()))
    }
}
