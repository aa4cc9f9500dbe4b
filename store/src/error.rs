//! Error types for acronym store operations.
//!
//! Provides a unified error type covering database discovery, open,
//! and query failures.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No usable database file at the override or fallback location.
    #[error(
        "no acronym database found: set '{}' or place '{}' next to the executable",
        crate::locate::STORE_ENV_VAR,
        crate::locate::DEFAULT_STORE_FILE
    )]
    NotFound,

    /// Failed to open the database file.
    #[error("failed to open database at '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// SQLite operation failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File metadata access failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
