//! Interactive record maintenance for the acrodb acronym database.
//!
//! Line editing is an injected capability: the workflows only see the
//! [`LineEditor`] trait (prompt, add to recall history, clear recall
//! history). Interactive runs plug in [`ReadlineEditor`]; tests and
//! non-terminal callers plug in [`ScriptedEditor`].
//!
//! The workflows themselves implement the prompt-confirm-commit cycle:
//! one parameterized field loop shared by insert and update
//! ([`collect_record`]), a single yes/no gate ([`confirm`]) used by
//! update and delete, and the three record flows that tie prompting to
//! store writes. Abandoning an attempt — `q` at the confirmation,
//! declining a gate, or interrupting any prompt — writes nothing and
//! clears any recall history the attempt added.

mod error;
mod line_editor;
mod readline;
mod scripted;
mod workflow;

pub use error::{EditorError, Result, WorkflowError};
pub use line_editor::LineEditor;
pub use readline::ReadlineEditor;
pub use scripted::ScriptedEditor;
pub use workflow::{
    DeleteOutcome, EditOutcome, collect_record, confirm, delete_interactive, insert_interactive,
    update_interactive,
};
