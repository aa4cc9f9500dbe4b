//! rustyline-backed line editor.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::error::EditorError;
use crate::line_editor::LineEditor;

/// Terminal editor backed by rustyline, with arrow-key recall of
/// history entries.
pub struct ReadlineEditor {
    inner: DefaultEditor,
}

impl ReadlineEditor {
    /// Creates a terminal-backed editor.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Backend`] when the terminal cannot be
    /// initialized.
    pub fn new() -> Result<Self, EditorError> {
        let inner = DefaultEditor::new().map_err(|err| EditorError::Backend(err.to_string()))?;
        Ok(Self { inner })
    }
}

impl LineEditor for ReadlineEditor {
    fn prompt(&mut self, text: &str) -> Result<String, EditorError> {
        match self.inner.readline(text) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                Err(EditorError::Interrupted)
            }
            Err(err) => Err(EditorError::Backend(err.to_string())),
        }
    }

    fn add_recall(&mut self, entry: &str) {
        if entry.is_empty() {
            return;
        }
        if let Err(err) = self.inner.add_history_entry(entry) {
            debug!("failed to add recall entry: {err}");
        }
    }

    fn clear_recall(&mut self) {
        if let Err(err) = self.inner.clear_history() {
            debug!("failed to clear recall history: {err}");
        }
    }
}
