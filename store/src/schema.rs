//! SQL schema for the acronym table.

/// Bootstrap SQL for the single `acronyms` table.
///
/// The implicit rowid is the record identifier. Payload columns stay
/// nullable so databases written by older tooling remain readable;
/// every read projection normalizes NULL to the empty string instead.
/// `IF NOT EXISTS` keeps the bootstrap idempotent.
pub(crate) const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS acronyms (
    acronym TEXT,
    expansion TEXT,
    description TEXT,
    source TEXT
);
";
