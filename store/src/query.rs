//! Record query operations.
//!
//! Every operation binds user input as SQL parameters — no caller text
//! is ever spliced into statement text — and every projection wraps the
//! payload columns in `ifnull(col, '')` so rows written with absent
//! fields never surface NULL to display or recall code.
//!
//! Mutations are single statements; callers refresh the session
//! counters afterwards via
//! [`Session::refresh_counts`](crate::Session::refresh_counts).

use rusqlite::params;
use tracing::debug;

use crate::error::Result;
use crate::record::{AcronymRecord, RecordDraft};
use crate::session::Session;

/// Shared projection for full-record reads.
const RECORD_COLUMNS: &str = "rowid, ifnull(acronym, ''), ifnull(expansion, ''), \
                              ifnull(description, ''), ifnull(source, '')";

fn record_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AcronymRecord> {
    Ok(AcronymRecord {
        id: row.get(0)?,
        acronym: row.get(1)?,
        expansion: row.get(2)?,
        description: row.get(3)?,
        source: row.get(4)?,
    })
}

impl Session {
    /// Case-insensitive pattern match against the acronym field,
    /// ordered by source.
    ///
    /// SQL `LIKE` wildcards (`%`, `_`) pass through as given, so a
    /// caller may search for an exact term, a prefix, or a substring.
    /// The match count is the length of the returned vector.
    pub fn search(&self, pattern: &str) -> Result<Vec<AcronymRecord>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT {RECORD_COLUMNS} FROM acronyms \
             WHERE acronym LIKE ?1 COLLATE NOCASE ORDER BY source"
        ))?;
        let records = stmt
            .query_map(params![pattern], record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// The most recently entered record, or `None` for an empty table.
    pub fn most_recent(&self) -> Result<Option<AcronymRecord>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT {RECORD_COLUMNS} FROM acronyms ORDER BY rowid DESC LIMIT 1"
        ))?;
        match stmt.query_row([], record_from_row) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                debug!("most-recent lookup on an empty acronym table");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// The `n` most recently entered records, newest first.
    pub fn latest(&self, n: u32) -> Result<Vec<AcronymRecord>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT {RECORD_COLUMNS} FROM acronyms ORDER BY rowid DESC LIMIT ?1"
        ))?;
        let records = stmt
            .query_map(params![n], record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// Distinct source values in ascending order.
    ///
    /// Used both for display and to seed the line editor's recall
    /// history, so a user entering a record can reuse a prior source
    /// without retyping it.
    pub fn distinct_sources(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT DISTINCT ifnull(source, '') FROM acronyms ORDER BY source")?;
        let sources = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(sources)
    }

    /// All rows matching a record id.
    ///
    /// The rowid predicate is expected to match at most one row; the
    /// vector lets callers distinguish zero, one, and the
    /// should-not-happen many.
    pub fn fetch(&self, id: i64) -> Result<Vec<AcronymRecord>> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT {RECORD_COLUMNS} FROM acronyms WHERE rowid = ?1"
        ))?;
        let records = stmt
            .query_map(params![id], record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// Inserts one record; any prepare or execute error fails the
    /// whole operation with nothing written.
    pub fn insert(&self, draft: &RecordDraft) -> Result<()> {
        self.conn.execute(
            "INSERT INTO acronyms (acronym, expansion, description, source) \
             VALUES (?1, ?2, ?3, ?4)",
            params![draft.acronym, draft.expansion, draft.description, draft.source],
        )?;
        Ok(())
    }

    /// Replaces the four text fields of the record with the given id.
    ///
    /// Returns the engine's changed-row count. A count other than one
    /// is an integrity anomaly for the caller to report — the change
    /// has already committed, so it is a warning, not a failure.
    pub fn update(&self, id: i64, draft: &RecordDraft) -> Result<usize> {
        let changed = self.conn.execute(
            "UPDATE acronyms SET acronym = ?1, expansion = ?2, description = ?3, source = ?4 \
             WHERE rowid = ?5",
            params![
                draft.acronym,
                draft.expansion,
                draft.description,
                draft.source,
                id
            ],
        )?;
        Ok(changed)
    }

    /// Deletes the record with the given id, returning the changed-row
    /// count (0 when nothing matched).
    pub fn delete(&self, id: i64) -> Result<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM acronyms WHERE rowid = ?1", params![id])?;
        Ok(changed)
    }
}
