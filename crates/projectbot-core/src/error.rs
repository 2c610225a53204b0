//! Error types surfaced by task list operations.

use thiserror::Error;

/// Reasons a task cannot be created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreateTaskError {
    /// Name was empty after trimming.
    #[error("task name cannot be empty")]
    EmptyName,

    /// Due date was not a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Text that is not a usable due date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid due date '{0}', expected YYYY-MM-DD")]
pub struct DueDateError(pub String);

/// Reasons a position does not resolve to a task.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Position outside `1..=len`.
    #[error("task number {position} is out of range (1..={len})")]
    OutOfRange {
        /// Requested 1-based position.
        position: usize,
        /// Number of tasks at the time of the lookup.
        len: usize,
    },
}
