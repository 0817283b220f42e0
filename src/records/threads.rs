//! Thread-list records.
//!
//! One record per thread of a watched process, keyed by thread id. Counters
//! (CPU, cycle and context-switch deltas) are refreshed in place on every
//! provider tick; the display cache row is invalidated by the model's
//! `refresh` path.

use crate::types::{ColumnId, Record, UNNAMED_TEXT};
use std::cmp::Ordering;

/// Columns of the thread-list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadColumn {
    Tid,
    Cpu,
    CyclesDelta,
    StartAddress,
    Priority,
    Name,
}

impl ThreadColumn {
    pub const COUNT: usize = 6;

    pub const fn id(self) -> ColumnId {
        ColumnId(self as u32)
    }

    fn from_id(column: ColumnId) -> Option<Self> {
        match column.0 {
            0 => Some(Self::Tid),
            1 => Some(Self::Cpu),
            2 => Some(Self::CyclesDelta),
            3 => Some(Self::StartAddress),
            4 => Some(Self::Priority),
            5 => Some(Self::Name),
            _ => None,
        }
    }
}

/// One thread of the watched process.
#[derive(Debug, Clone)]
pub struct ThreadRecord {
    pub thread_id: u32,
    /// Fraction of one core, 0.0..=1.0.
    pub cpu_usage: f32,
    pub cycles_delta: u64,
    pub context_switches: u64,
    pub start_address: u64,
    pub priority: i32,
    pub name: Option<String>,
}

impl ThreadRecord {
    pub fn new(thread_id: u32, start_address: u64, priority: i32) -> Self {
        Self {
            thread_id,
            cpu_usage: 0.0,
            cycles_delta: 0,
            context_switches: 0,
            start_address,
            priority,
            name: None,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Apply one provider tick worth of counter updates.
    pub fn tick(&mut self, cpu_usage: f32, cycles_delta: u64, context_switches: u64) {
        self.cpu_usage = cpu_usage;
        self.cycles_delta = cycles_delta;
        self.context_switches = context_switches;
    }

    fn name_text(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => UNNAMED_TEXT.to_string(),
        }
    }
}

impl Record for ThreadRecord {
    type Key = u32;
    const COLUMN_COUNT: usize = ThreadColumn::COUNT;

    fn key(&self) -> u32 {
        self.thread_id
    }

    fn compare_column(&self, other: &Self, column: ColumnId) -> Ordering {
        match ThreadColumn::from_id(column) {
            Some(ThreadColumn::Tid) => self.thread_id.cmp(&other.thread_id),
            Some(ThreadColumn::Cpu) => self.cpu_usage.total_cmp(&other.cpu_usage),
            Some(ThreadColumn::CyclesDelta) => self.cycles_delta.cmp(&other.cycles_delta),
            Some(ThreadColumn::StartAddress) => self.start_address.cmp(&other.start_address),
            Some(ThreadColumn::Priority) => self.priority.cmp(&other.priority),
            Some(ThreadColumn::Name) => self.name_text().cmp(&other.name_text()),
            None => Ordering::Equal,
        }
    }

    fn column_text(&self, column: ColumnId) -> String {
        match ThreadColumn::from_id(column) {
            Some(ThreadColumn::Tid) => self.thread_id.to_string(),
            Some(ThreadColumn::Cpu) => format!("{:.2}", self.cpu_usage * 100.0),
            Some(ThreadColumn::CyclesDelta) => self.cycles_delta.to_string(),
            Some(ThreadColumn::StartAddress) => format!("0x{:x}", self.start_address),
            Some(ThreadColumn::Priority) => self.priority.to_string(),
            Some(ThreadColumn::Name) => self.name_text(),
            None => String::new(),
        }
    }

    fn filter_columns() -> &'static [ColumnId] {
        const COLUMNS: [ColumnId; 3] = [
            ThreadColumn::Tid.id(),
            ThreadColumn::StartAddress.id(),
            ThreadColumn::Name.id(),
        ];
        &COLUMNS
    }
}
