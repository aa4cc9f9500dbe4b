//! Integration tests for the interactive workflows, driven end to end
//! with a scripted editor against in-memory stores.

use acrodb_editor::{
    DeleteOutcome, EditOutcome, ScriptedEditor, delete_interactive, insert_interactive,
    update_interactive,
};
use acrodb_store::{AcronymRecord, RecordDraft, Session};

/// In-memory session seeded with three records (ids 1-3).
fn seeded_session() -> Session {
    let mut session = Session::open_in_memory().unwrap();
    for draft in [
        RecordDraft::new("AB", "Able Body", "Seafaring rank", "X"),
        RecordDraft::new("abc", "Another B Co", "", "Y"),
        RecordDraft::new("TLA", "Three Letter Acronym", "Self-describing", "General"),
    ] {
        session.insert(&draft).unwrap();
        session.refresh_counts().unwrap();
    }
    session
}

/// Full table snapshot for before/after comparisons.
fn all_rows(session: &Session) -> Vec<AcronymRecord> {
    session.search("%").unwrap()
}

// ---------------------------------------------------------------------------
// Insert flow
// ---------------------------------------------------------------------------

#[test]
fn insert_confirmed_with_y_adds_one_record() {
    let mut session = seeded_session();
    let mut editor = ScriptedEditor::new([
        "MIT",
        "Massachusetts Institute of Technology",
        "University",
        "Education",
        "y",
    ]);

    let outcome = insert_interactive(&mut session, &mut editor).unwrap();
    assert_eq!(outcome, EditOutcome::Committed);
    assert_eq!(session.total_records(), 4);
    assert_eq!(session.previous_total(), 3);
    assert_eq!(session.count_delta(), 1);

    let found = session.search("MIT").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].source, "Education");
}

#[test]
fn insert_abandoned_with_q_leaves_store_unchanged() {
    let mut session = seeded_session();
    let before = all_rows(&session);
    let mut editor = ScriptedEditor::new(["XX", "Xed", "desc", "src", "q"]);

    let outcome = insert_interactive(&mut session, &mut editor).unwrap();
    assert_eq!(outcome, EditOutcome::Abandoned);
    assert_eq!(session.total_records(), 3);
    assert_eq!(session.max_record_id(), 3);
    assert_eq!(all_rows(&session), before);
    assert!(editor.recall().is_empty());
}

#[test]
fn insert_interrupted_mid_fields_leaves_store_unchanged() {
    let mut session = seeded_session();
    let before = all_rows(&session);
    // The reply queue runs dry after two fields.
    let mut editor = ScriptedEditor::new(["XX", "Xed"]);

    let outcome = insert_interactive(&mut session, &mut editor).unwrap();
    assert_eq!(outcome, EditOutcome::Abandoned);
    assert_eq!(all_rows(&session), before);
}

#[test]
fn insert_retry_discards_the_rejected_attempt() {
    let mut session = seeded_session();
    let mut editor = ScriptedEditor::new([
        "BAD", "bad", "bad", "bad", "n", // rejected attempt
        "GOOD", "Good expansion", "", "X", "y",
    ]);

    let outcome = insert_interactive(&mut session, &mut editor).unwrap();
    assert_eq!(outcome, EditOutcome::Committed);
    assert!(session.search("BAD").unwrap().is_empty());
    assert_eq!(session.search("GOOD").unwrap().len(), 1);
    assert_eq!(session.total_records(), 4);
}

#[test]
fn insert_into_empty_store_works() {
    let mut session = Session::open_in_memory().unwrap();
    let mut editor = ScriptedEditor::new(["AB", "Able Body", "", "X", "y"]);

    let outcome = insert_interactive(&mut session, &mut editor).unwrap();
    assert_eq!(outcome, EditOutcome::Committed);
    assert_eq!(session.total_records(), 1);
    assert_eq!(session.previous_total(), 0);
}

// ---------------------------------------------------------------------------
// Update flow
// ---------------------------------------------------------------------------

#[test]
fn update_confirmed_with_y_replaces_all_fields() {
    let mut session = seeded_session();
    let mut editor = ScriptedEditor::new([
        "y", // pre-edit gate
        "ABC", "Adjusted Expansion", "New description", "Z", "y",
    ]);

    let outcome = update_interactive(&mut session, &mut editor, 2).unwrap();
    assert_eq!(outcome, EditOutcome::Committed);
    assert_eq!(session.total_records(), 3);

    let rows = session.fetch(2).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].acronym, "ABC");
    assert_eq!(rows[0].expansion, "Adjusted Expansion");
    assert_eq!(rows[0].description, "New description");
    assert_eq!(rows[0].source, "Z");
}

#[test]
fn update_declined_at_gate_changes_nothing() {
    let mut session = seeded_session();
    let before = all_rows(&session);
    let mut editor = ScriptedEditor::new(["n"]);

    let outcome = update_interactive(&mut session, &mut editor, 2).unwrap();
    assert_eq!(outcome, EditOutcome::Abandoned);
    assert_eq!(all_rows(&session), before);
    // The gate is the only prompt reached.
    assert_eq!(editor.prompts().len(), 1);
    assert!(editor.recall().is_empty());
}

#[test]
fn update_aborted_in_field_loop_changes_nothing() {
    let mut session = seeded_session();
    let before = all_rows(&session);
    let mut editor = ScriptedEditor::new(["y", "ABC", "adj", "d", "Z", "q"]);

    let outcome = update_interactive(&mut session, &mut editor, 2).unwrap();
    assert_eq!(outcome, EditOutcome::Abandoned);
    assert_eq!(all_rows(&session), before);
}

#[test]
fn update_of_missing_id_is_reported_not_fatal() {
    let mut session = seeded_session();
    let mut editor = ScriptedEditor::default();

    let outcome = update_interactive(&mut session, &mut editor, 99).unwrap();
    assert_eq!(outcome, EditOutcome::NotFound);
    // No prompt is ever shown for a missing record.
    assert!(editor.prompts().is_empty());
}

#[test]
fn update_seeds_current_fields_before_the_gate() {
    let mut session = seeded_session();
    let mut editor = ScriptedEditor::new(["y", "A", "E", "D", "S", "y"]);

    update_interactive(&mut session, &mut editor, 1).unwrap();
    let gate_prompt = &editor.prompts()[0];
    assert!(gate_prompt.contains("Update the above record?"));

    // The record's four current values were offered for recall before
    // the gate, ahead of anything typed in the field loop.
    let log = editor.recall_log();
    assert_eq!(&log[..4], ["AB", "Able Body", "Seafaring rank", "X"]);
    // Recall is transient per-attempt state: nothing survives the flow.
    assert!(editor.recall().is_empty());
}

// ---------------------------------------------------------------------------
// Delete flow
// ---------------------------------------------------------------------------

#[test]
fn delete_scenario_three_records_then_repeat() {
    let mut session = seeded_session();

    // Confirmed delete of id 2: count 2, ids {1,3} remain.
    let mut editor = ScriptedEditor::new(["y"]);
    let outcome = delete_interactive(&mut session, &mut editor, 2).unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(session.total_records(), 2);
    assert_eq!(session.previous_total(), 3);

    let ids: Vec<i64> = all_rows(&session).iter().map(|r| r.id).collect();
    assert!(ids.contains(&1));
    assert!(ids.contains(&3));

    // A second delete of id 2 finds nothing and does not crash.
    let mut editor = ScriptedEditor::new(["y"]);
    let outcome = delete_interactive(&mut session, &mut editor, 2).unwrap();
    assert_eq!(outcome, DeleteOutcome::NotFound);
    assert_eq!(session.total_records(), 2);
    // The confirmation gate is never reached.
    assert!(editor.prompts().is_empty());
}

#[test]
fn delete_declined_leaves_count_unchanged() {
    let mut session = seeded_session();
    let before = all_rows(&session);
    let mut editor = ScriptedEditor::new(["n"]);

    let outcome = delete_interactive(&mut session, &mut editor, 2).unwrap();
    assert_eq!(outcome, DeleteOutcome::Abandoned);
    assert_eq!(session.total_records(), 3);
    assert_eq!(all_rows(&session), before);
}

#[test]
fn delete_interrupted_at_gate_counts_as_decline() {
    let mut session = seeded_session();
    let mut editor = ScriptedEditor::default();

    let outcome = delete_interactive(&mut session, &mut editor, 1).unwrap();
    assert_eq!(outcome, DeleteOutcome::Abandoned);
    assert_eq!(session.total_records(), 3);
}
