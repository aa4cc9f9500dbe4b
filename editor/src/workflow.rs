//! Interactive create, update, and delete workflows.
//!
//! One parameterized collect-and-confirm loop serves both insert and
//! update; delete uses the single yes/no gate. The flows own the
//! sequencing rules: fetch-and-display before update/delete, recall
//! seeding, confirmation, the write itself, and the counter refresh
//! that keeps reported count deltas accurate. Aborting at any prompt
//! leaves the store untouched.

use acrodb_store::{RecordDraft, Session};
use tracing::warn;

use crate::error::{EditorError, Result};
use crate::line_editor::LineEditor;

/// Result of an interactive insert or update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The record was written and counters refreshed.
    Committed,
    /// The user abandoned the attempt; nothing was written.
    Abandoned,
    /// No row matched the requested id; nothing was written.
    NotFound,
    /// More than one row matched the id; the write was skipped.
    Ambiguous(usize),
}

/// Result of an interactive delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Abandoned,
    /// No row matched the requested id.
    NotFound,
    /// More than one row matched the id; the delete was skipped.
    Ambiguous(usize),
}

/// Runs the shared field-entry loop: acronym, expansion, description,
/// then source (with the known source list seeded into recall), ending
/// at a confirmation prompt.
///
/// `y` commits the draft, `q` aborts, and any other reply discards the
/// attempt and restarts from the first field. Returns `None` on abort;
/// an interrupt at any prompt aborts the same way. Recall history
/// added during the attempt is cleared on every exit path.
pub fn collect_record(
    editor: &mut dyn LineEditor,
    sources: &[String],
) -> std::result::Result<Option<RecordDraft>, EditorError> {
    let outcome = run_field_loop(editor, sources);
    editor.clear_recall();
    match outcome {
        Err(EditorError::Interrupted) => Ok(None),
        other => other,
    }
}

fn run_field_loop(
    editor: &mut dyn LineEditor,
    sources: &[String],
) -> std::result::Result<Option<RecordDraft>, EditorError> {
    loop {
        let acronym = read_field(editor, "Enter the acronym: ")?;
        let expansion = read_field(editor, "Enter the expanded acronym: ")?;
        let description = read_field(editor, "Enter the acronym description: ")?;
        offer_sources(editor, sources);
        let source = read_field(editor, "Enter the acronym source: ")?;

        let draft = RecordDraft {
            acronym,
            expansion,
            description,
            source,
        };
        println!("\nConfirm entry for:\n\n{draft}\n");

        let reply = editor.prompt("Enter record? [ y/n or q ] : ")?;
        if reply.eq_ignore_ascii_case("y") {
            return Ok(Some(draft));
        }
        if reply.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        // Anything else: discard this attempt's values and start over.
    }
}

fn read_field(
    editor: &mut dyn LineEditor,
    prompt: &str,
) -> std::result::Result<String, EditorError> {
    let value = editor.prompt(prompt)?;
    editor.add_recall(&value);
    Ok(value)
}

/// Shows the known source values and seeds them into recall so the
/// user can pick one with the arrow keys instead of retyping.
fn offer_sources(editor: &mut dyn LineEditor, sources: &[String]) {
    if sources.is_empty() {
        return;
    }
    let listed: Vec<String> = sources.iter().map(|s| format!("[ {s} ]")).collect();
    println!("\nKnown sources (recall with ↑ or ↓): {}", listed.join(" "));
    for source in sources {
        editor.add_recall(source);
    }
}

/// Single yes/no gate; only `y` (any case) proceeds, and an interrupt
/// counts as a decline.
pub fn confirm(
    editor: &mut dyn LineEditor,
    prompt: &str,
) -> std::result::Result<bool, EditorError> {
    match editor.prompt(prompt) {
        Ok(reply) => Ok(reply.eq_ignore_ascii_case("y")),
        Err(EditorError::Interrupted) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Interactive insert: collect a draft, write it, refresh counters,
/// and report the count delta.
pub fn insert_interactive(
    session: &mut Session,
    editor: &mut dyn LineEditor,
) -> Result<EditOutcome> {
    println!("\nAdding a new record...");
    println!("Note: press Ctrl-C at any prompt to abort\n");

    let sources = session.distinct_sources()?;
    let Some(draft) = collect_record(editor, &sources)? else {
        println!("\nAdding a new record was abandoned by the user");
        return Ok(EditOutcome::Abandoned);
    };

    session.insert(&draft)?;
    session.refresh_counts()?;
    println!(
        "Inserted '{}' new record. Total database record count is now {} (was {}).",
        session.count_delta(),
        session.total_records(),
        session.previous_total()
    );
    Ok(EditOutcome::Committed)
}

/// Interactive update: fetch and display the target, seed its fields
/// into recall, gate with a yes/no prompt, then run the shared field
/// loop and write the replacement.
pub fn update_interactive(
    session: &mut Session,
    editor: &mut dyn LineEditor,
    id: i64,
) -> Result<EditOutcome> {
    println!("\nUpdating an acronym record...");
    println!("Note: press Ctrl-C at any prompt to abort\n");
    println!("Searching for record ID: '{id}' in database...\n");

    let matches = session.fetch(id)?;
    let record = match matches.as_slice() {
        [] => {
            println!(" » WARNING: record ID '{id}' found no matching records «");
            return Ok(EditOutcome::NotFound);
        }
        [record] => record,
        many => {
            warn!("record id {id} matched {} rows; skipping update", many.len());
            eprintln!(
                " » ERROR: record ID '{id}' search returned '{}' records «",
                many.len()
            );
            return Ok(EditOutcome::Ambiguous(many.len()));
        }
    };

    println!("{record}\n");
    // Seed the current field values for retrieve-and-edit.
    editor.add_recall(&record.acronym);
    editor.add_recall(&record.expansion);
    editor.add_recall(&record.description);
    editor.add_recall(&record.source);

    if !confirm(editor, "Update the above record? [ y/n ] : ")? {
        editor.clear_recall();
        println!("\nRequest to update record ID '{id}' was abandoned by the user");
        return Ok(EditOutcome::Abandoned);
    }

    println!("\nUse ↑ or ↓ to recall previous entries for re-editing, or type new text:\n");
    let sources = session.distinct_sources()?;
    let Some(draft) = collect_record(editor, &sources)? else {
        println!("\nRequest to update record ID '{id}' was abandoned by the user");
        return Ok(EditOutcome::Abandoned);
    };

    let changed = session.update(id, &draft)?;
    if changed != 1 {
        // The change has already committed; report, never roll back.
        warn!("update of record id {id} changed {changed} rows; expected exactly one");
        eprintln!(
            "\nWARNING: update of record ID '{id}' changed '{changed}' rows - expected exactly one"
        );
    }
    session.refresh_counts()?;
    println!(
        "Updated '{changed}' record. Total database record count is now {} (was {}).",
        session.total_records(),
        session.previous_total()
    );
    Ok(EditOutcome::Committed)
}

/// Interactive delete: fetch and display the target, gate with a
/// yes/no prompt, then delete and refresh counters.
pub fn delete_interactive(
    session: &mut Session,
    editor: &mut dyn LineEditor,
    id: i64,
) -> Result<DeleteOutcome> {
    println!("\nDeleting an acronym record...");
    println!("Note: press Ctrl-C at any prompt to abort\n");
    println!("Searching for record ID: '{id}' in database...\n");

    let matches = session.fetch(id)?;
    let record = match matches.as_slice() {
        [] => {
            println!(" » WARNING: record ID '{id}' found no matching records «");
            return Ok(DeleteOutcome::NotFound);
        }
        [record] => record,
        many => {
            warn!("record id {id} matched {} rows; skipping delete", many.len());
            eprintln!(
                " » ERROR: record ID '{id}' search returned '{}' records «",
                many.len()
            );
            return Ok(DeleteOutcome::Ambiguous(many.len()));
        }
    };

    println!("{record}\n");
    if !confirm(editor, "Delete the above record? [ y/n ] : ")? {
        println!("\nRequest to delete record ID '{id}' was abandoned by the user");
        return Ok(DeleteOutcome::Abandoned);
    }

    let changed = session.delete(id)?;
    session.refresh_counts()?;
    println!(
        "Deleted '{changed}' record. Total database record count is now {} (was {}).",
        session.total_records(),
        session.previous_total()
    );
    Ok(DeleteOutcome::Deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripted::ScriptedEditor;

    #[test]
    fn test_collect_record_commits_on_y() {
        let mut editor = ScriptedEditor::new(["MIT", "Massachusetts", "University", "Edu", "y"]);
        let draft = collect_record(&mut editor, &[]).unwrap().unwrap();
        assert_eq!(
            draft,
            RecordDraft::new("MIT", "Massachusetts", "University", "Edu")
        );
        // Per-attempt recall is dropped after the loop.
        assert!(editor.recall().is_empty());
    }

    #[test]
    fn test_collect_record_aborts_on_q() {
        let mut editor = ScriptedEditor::new(["a", "b", "c", "d", "q"]);
        assert!(collect_record(&mut editor, &[]).unwrap().is_none());
        assert!(editor.recall().is_empty());
    }

    #[test]
    fn test_collect_record_retries_on_other_reply() {
        let mut editor = ScriptedEditor::new([
            "a1", "e1", "d1", "s1", "n", // rejected attempt
            "a2", "e2", "d2", "s2", "Y", // accepted, case-insensitive
        ]);
        let draft = collect_record(&mut editor, &[]).unwrap().unwrap();
        assert_eq!(draft, RecordDraft::new("a2", "e2", "d2", "s2"));
    }

    #[test]
    fn test_collect_record_treats_interrupt_as_abort() {
        // Queue runs dry after the first field.
        let mut editor = ScriptedEditor::new(["only-acronym"]);
        assert!(collect_record(&mut editor, &[]).unwrap().is_none());
        assert!(editor.recall().is_empty());
    }

    #[test]
    fn test_collect_record_seeds_sources_before_source_prompt() {
        let sources = vec!["General".to_string(), "X".to_string()];
        // Queue runs dry at the source prompt: the source seeds were
        // added during the attempt and must be gone afterwards.
        let mut editor = ScriptedEditor::new(["a", "e", "d"]);
        assert!(collect_record(&mut editor, &sources).unwrap().is_none());
        assert!(editor.recall().is_empty());
        assert_eq!(
            editor.prompts().last().map(String::as_str),
            Some("Enter the acronym source: ")
        );
    }

    #[test]
    fn test_confirm_accepts_only_yes() {
        let mut editor = ScriptedEditor::new(["y", "Y", "n", "yes"]);
        assert!(confirm(&mut editor, "? ").unwrap());
        assert!(confirm(&mut editor, "? ").unwrap());
        assert!(!confirm(&mut editor, "? ").unwrap());
        assert!(!confirm(&mut editor, "? ").unwrap());
    }

    #[test]
    fn test_confirm_declines_on_interrupt() {
        let mut editor = ScriptedEditor::default();
        assert!(!confirm(&mut editor, "? ").unwrap());
    }
}
