//! Acronym record types shared across the workspace.

use std::fmt;

/// A stored acronym row, as read from the database.
///
/// All four text fields are normalized to empty strings on read, so
/// display and recall-history code never sees an absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymRecord {
    /// Store-assigned rowid; the handle for update and delete.
    pub id: i64,
    pub acronym: String,
    pub expansion: String,
    pub description: String,
    pub source: String,
}

impl fmt::Display for AcronymRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID:          {}", self.id)?;
        writeln!(f, "ACRONYM:     '{}' is: {}.", self.acronym, self.expansion)?;
        writeln!(f, "SOURCE:      '{}'", self.source)?;
        write!(f, "DESCRIPTION: {}", self.description)
    }
}

/// The four text fields of a record before it has a rowid.
///
/// Collected by the interactive editor and consumed by
/// [`Session::insert`](crate::Session::insert) and
/// [`Session::update`](crate::Session::update).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub acronym: String,
    pub expansion: String,
    pub description: String,
    pub source: String,
}

impl RecordDraft {
    pub fn new(
        acronym: impl Into<String>,
        expansion: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            acronym: acronym.into(),
            expansion: expansion.into(),
            description: description.into(),
            source: source.into(),
        }
    }
}

impl fmt::Display for RecordDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ACRONYM:     '{}' is: {}.", self.acronym, self.expansion)?;
        writeln!(f, "SOURCE:      '{}'", self.source)?;
        write!(f, "DESCRIPTION: {}", self.description)
    }
}
