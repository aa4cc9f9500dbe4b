//! SQLite storage backend for the acrodb acronym database.
//!
//! A single table of acronym records (acronym, expansion, description,
//! source) lives in one SQLite file. This crate owns the full lifecycle
//! of that file: discovering it, opening a [`Session`] around the
//! process's only connection, keeping the derived counters (total
//! record count, previous count, highest record id) in step with
//! mutations, and running the record operations themselves.
//!
//! # Architecture
//!
//! - **`locate`** — resolves the database path from the `ACRODB`
//!   environment override or the executable-adjacent default, capturing
//!   file metadata for reporting
//! - **`session`** — connection ownership, schema bootstrap, counter
//!   maintenance, and release
//! - **`query`** — search, recency reports, and the insert/update/
//!   delete record operations (all parameter-bound)
//! - **`record`** — the row types shared with the interactive editor
//!
//! # Quick start
//!
//! ```no_run
//! use acrodb_store::{RecordDraft, Session, StoreLocation};
//!
//! let location = StoreLocation::locate().unwrap();
//! let mut session = Session::open(location).unwrap();
//!
//! session
//!     .insert(&RecordDraft::new("TLA", "Three Letter Acronym", "", "General"))
//!     .unwrap();
//! session.refresh_counts().unwrap();
//!
//! for record in session.search("TLA").unwrap() {
//!     println!("{record}");
//! }
//! ```

mod error;
mod locate;
mod query;
mod record;
mod schema;
mod session;

pub use error::{Result, StoreError};
pub use locate::{DEFAULT_STORE_FILE, STORE_ENV_VAR, StoreLocation};
pub use record::{AcronymRecord, RecordDraft};
pub use session::Session;
