//! PE import-table records.
//!
//! One record per imported function. Keys are sequence numbers assigned at
//! discovery time. Name resolution happens in the producer; an import with
//! no name renders its ordinal as `"(Ordinal N)"`, and delay-loaded imports
//! carry a `" (Delay)"` suffix on the DLL column.

use crate::types::{ColumnId, Record, UNNAMED_TEXT};
use std::cmp::Ordering;

/// Placeholder shown while the import enumeration is still running.
pub const LOADING_IMPORTS_TEXT: &str = "Loading imports from image...";
/// Placeholder shown when the image has no imports (or enumeration failed).
pub const EMPTY_IMPORTS_TEXT: &str = "There are no imports to display.";

/// Columns of the import-table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportColumn {
    Index,
    Rva,
    Dll,
    Name,
    Hint,
}

impl ImportColumn {
    pub const COUNT: usize = 5;

    pub const fn id(self) -> ColumnId {
        ColumnId(self as u32)
    }

    fn from_id(column: ColumnId) -> Option<Self> {
        match column.0 {
            0 => Some(Self::Index),
            1 => Some(Self::Rva),
            2 => Some(Self::Dll),
            3 => Some(Self::Name),
            4 => Some(Self::Hint),
            _ => None,
        }
    }
}

/// One imported function.
#[derive(Debug, Clone)]
pub struct ImportRecord {
    /// Discovery sequence number, unique within one view.
    pub unique_id: u64,
    /// RVA of the import's IAT thunk.
    pub rva: u64,
    /// Owning module name.
    pub dll: String,
    /// Whether the import comes from the delay-load descriptor.
    pub delay_load: bool,
    /// Resolved import name, if imported by name.
    pub name: Option<String>,
    /// Ordinal, if imported by ordinal.
    pub ordinal: Option<u16>,
    /// Name hint, if imported by name.
    pub hint: Option<u32>,
}

impl ImportRecord {
    pub fn by_name(unique_id: u64, rva: u64, dll: &str, name: &str, hint: u32) -> Self {
        Self {
            unique_id,
            rva,
            dll: dll.to_string(),
            delay_load: false,
            name: Some(name.to_string()),
            ordinal: None,
            hint: Some(hint),
        }
    }

    pub fn by_ordinal(unique_id: u64, rva: u64, dll: &str, ordinal: u16) -> Self {
        Self {
            unique_id,
            rva,
            dll: dll.to_string(),
            delay_load: false,
            name: None,
            ordinal: Some(ordinal),
            hint: None,
        }
    }

    pub fn delay_loaded(mut self) -> Self {
        self.delay_load = true;
        self
    }

    fn dll_text(&self) -> String {
        if self.delay_load {
            format!("{} (Delay)", self.dll)
        } else {
            self.dll.clone()
        }
    }

    fn name_text(&self) -> String {
        match (&self.name, self.ordinal) {
            (Some(name), _) => name.clone(),
            (None, Some(ordinal)) => format!("(Ordinal {ordinal})"),
            (None, None) => UNNAMED_TEXT.to_string(),
        }
    }
}

impl Record for ImportRecord {
    type Key = u64;
    const COLUMN_COUNT: usize = ImportColumn::COUNT;

    fn key(&self) -> u64 {
        self.unique_id
    }

    fn compare_column(&self, other: &Self, column: ColumnId) -> Ordering {
        match ImportColumn::from_id(column) {
            Some(ImportColumn::Index) => self.unique_id.cmp(&other.unique_id),
            Some(ImportColumn::Rva) => self.rva.cmp(&other.rva),
            Some(ImportColumn::Dll) => self.dll_text().cmp(&other.dll_text()),
            Some(ImportColumn::Name) => self.name_text().cmp(&other.name_text()),
            Some(ImportColumn::Hint) => self.hint.unwrap_or(0).cmp(&other.hint.unwrap_or(0)),
            None => Ordering::Equal,
        }
    }

    fn column_text(&self, column: ColumnId) -> String {
        match ImportColumn::from_id(column) {
            Some(ImportColumn::Index) => self.unique_id.to_string(),
            Some(ImportColumn::Rva) => format!("0x{:x}", self.rva),
            Some(ImportColumn::Dll) => self.dll_text(),
            Some(ImportColumn::Name) => self.name_text(),
            Some(ImportColumn::Hint) => self.hint.map(|h| h.to_string()).unwrap_or_default(),
            None => String::new(),
        }
    }

    fn filter_columns() -> &'static [ColumnId] {
        // Every textual column participates, including the index, so a
        // search for e.g. "42" can land on the sequence number.
        const COLUMNS: [ColumnId; 5] = [
            ImportColumn::Index.id(),
            ImportColumn::Rva.id(),
            ImportColumn::Dll.id(),
            ImportColumn::Name.id(),
            ImportColumn::Hint.id(),
        ];
        &COLUMNS
    }
}
