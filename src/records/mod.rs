//! Concrete record kinds built on the generic engine.
//!
//! Each submodule defines one record kind (payload, column set, comparators,
//! display text) the way a host application instantiates the engine per view:
//! same machinery, different payload shape and columns.

pub mod imports;
pub mod threads;

pub use imports::{ImportColumn, ImportRecord};
pub use threads::{ThreadColumn, ThreadRecord};
