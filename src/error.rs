//! Error handling for the tree/list engine
//!
//! Most "failures" in this engine are ordinary return values: a duplicate-key
//! add returns `false`, a lookup miss returns `None`, and a failing record
//! source simply yields an empty store. The error type below covers the few
//! cases a caller can actually act on.

use thiserror::Error;

/// Main error type for tree/list engine operations
#[derive(Error, Debug)]
pub enum TreeListError {
    /// A population pass was requested while one is still outstanding
    #[error("population pipeline already running")]
    PipelineActive,

    /// Errors reported by a record source during enumeration
    #[error("source error: {0}")]
    Source(String),

    /// Errors decoding or encoding persisted view settings
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for tree/list engine operations
pub type Result<T> = std::result::Result<T, TreeListError>;
