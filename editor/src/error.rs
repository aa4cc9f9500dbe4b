//! Error types for interactive editing.

use thiserror::Error;

/// Errors surfaced by a [`LineEditor`](crate::LineEditor) backend.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The user interrupted the prompt (Ctrl-C or Ctrl-D).
    #[error("input interrupted")]
    Interrupted,

    /// The line-editing backend failed.
    #[error("line editor failure: {0}")]
    Backend(String),
}

/// Errors from the interactive workflows.
///
/// Interrupts never surface here — the workflows convert them into an
/// abandoned outcome. What remains is fatal for the invocation.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Store(#[from] acrodb_store::StoreError),
}

/// Convenience alias for results with [`WorkflowError`].
pub type Result<T> = std::result::Result<T, WorkflowError>;
