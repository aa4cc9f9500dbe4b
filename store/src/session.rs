//! Session lifecycle for the acronym database.
//!
//! [`Session`] owns the process's only connection to the store. It is
//! constructed once at startup, passed by reference into every
//! operation, and released exactly once: explicitly through
//! [`close`](Session::close) on the normal path, or by `Drop` on any
//! early-return path. There is no second handle and no shared global.
//!
//! The session also carries the derived counters the reports rely on:
//! the current total record count, the count before the most recent
//! mutation, and the highest rowid. Callers refresh them after every
//! successful insert, update, or delete so count deltas shown to the
//! user stay accurate.

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::locate::StoreLocation;
use crate::schema::SCHEMA_SQL;

/// An open acronym database with derived counters.
pub struct Session {
    pub(crate) conn: Connection,
    location: StoreLocation,
    total: i64,
    prev_total: i64,
    max_recid: i64,
}

impl Session {
    /// Opens the database read-write, creating the file and table when
    /// absent, and primes the counters.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Open`] when the engine cannot open the
    /// file read-write, or a query error from counter priming. Both
    /// are fatal for the caller.
    pub fn open(location: StoreLocation) -> Result<Self> {
        let conn = Connection::open_with_flags(
            location.path(),
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
        )
        .map_err(|source| StoreError::Open {
            path: location.path().to_path_buf(),
            source,
        })?;
        conn.execute_batch(SCHEMA_SQL)?;

        let mut session = Self {
            conn,
            location,
            total: 0,
            prev_total: 0,
            max_recid: 0,
        };
        session.refresh_counts()?;
        debug!(
            "opened acronym database at {} ({} records)",
            session.location.path().display(),
            session.total
        );
        Ok(session)
    }

    /// Opens an in-memory store with the schema created (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA_SQL)?;
        let mut session = Self {
            conn,
            location: StoreLocation::in_memory(),
            total: 0,
            prev_total: 0,
            max_recid: 0,
        };
        session.refresh_counts()?;
        Ok(session)
    }

    /// Re-reads the total record count and the highest rowid.
    ///
    /// The existing total is shifted into the previous total only when
    /// it is positive, so the first refresh after open leaves the
    /// previous total at zero and every later refresh preserves the
    /// count as it stood before the most recent mutation.
    pub fn refresh_counts(&mut self) -> Result<()> {
        if self.total > 0 {
            self.prev_total = self.total;
        }
        self.total = self
            .conn
            .query_row("SELECT count(*) FROM acronyms", [], |row| row.get(0))?;
        // MAX(rowid) is NULL for an empty table.
        self.max_recid = self
            .conn
            .query_row("SELECT MAX(rowid) FROM acronyms", [], |row| {
                row.get::<_, Option<i64>>(0)
            })?
            .unwrap_or(0);
        Ok(())
    }

    /// Current total record count.
    pub fn total_records(&self) -> i64 {
        self.total
    }

    /// Total record count before the most recent mutation.
    pub fn previous_total(&self) -> i64 {
        self.prev_total
    }

    /// Net record-count change across the most recent mutation.
    pub fn count_delta(&self) -> i64 {
        self.total - self.prev_total
    }

    /// Highest rowid in the table, 0 when empty. The upper bound for
    /// record ids accepted by update and delete.
    pub fn max_record_id(&self) -> i64 {
        self.max_recid
    }

    /// The resolved file location this session was opened from.
    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    /// Raw connection access (for advanced usage and tests).
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Releases the connection, surfacing any close failure.
    ///
    /// Paths that drop the session instead release the handle through
    /// `Drop`; either way it is released exactly once.
    pub fn close(self) -> Result<()> {
        let Session { conn, location, .. } = self;
        debug!("closing acronym database at {}", location.path().display());
        conn.close().map_err(|(_, err)| StoreError::Database(err))
    }
}
