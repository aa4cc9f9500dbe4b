//! The injected line-editing capability.

use crate::error::EditorError;

/// Prompt-and-read with recall history.
///
/// The workflows never assume a concrete implementation. Recall
/// history is transient per-attempt state: entries added while
/// collecting a record are dropped before the workflow returns,
/// whether it commits or aborts.
pub trait LineEditor {
    /// Displays `text` and reads one line of input.
    ///
    /// # Errors
    ///
    /// [`EditorError::Interrupted`] when the user aborts the prompt;
    /// [`EditorError::Backend`] for any other read failure.
    fn prompt(&mut self, text: &str) -> Result<String, EditorError>;

    /// Adds an entry to the recall history offered at later prompts.
    fn add_recall(&mut self, entry: &str);

    /// Drops all recall history added so far.
    fn clear_recall(&mut self);
}
