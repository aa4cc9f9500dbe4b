//! Scripted line editor for tests and non-interactive callers.

use std::collections::VecDeque;

use crate::error::EditorError;
use crate::line_editor::LineEditor;

/// Replays queued replies instead of reading a terminal.
///
/// Each prompt consumes the next queued reply; an exhausted queue
/// behaves like an interrupt, which the workflows treat as an abort.
/// Prompts shown and recall entries added are kept for inspection.
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    replies: VecDeque<String>,
    recall: Vec<String>,
    recall_log: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedEditor {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            recall: Vec::new(),
            recall_log: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Recall entries currently held.
    pub fn recall(&self) -> &[String] {
        &self.recall
    }

    /// Every recall entry ever added, surviving clears.
    pub fn recall_log(&self) -> &[String] {
        &self.recall_log
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineEditor for ScriptedEditor {
    fn prompt(&mut self, text: &str) -> Result<String, EditorError> {
        self.prompts.push(text.to_string());
        self.replies.pop_front().ok_or(EditorError::Interrupted)
    }

    fn add_recall(&mut self, entry: &str) {
        if !entry.is_empty() {
            self.recall.push(entry.to_string());
            self.recall_log.push(entry.to_string());
        }
    }

    fn clear_recall(&mut self) {
        self.recall.clear();
    }
}
