//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or querying task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The due date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    /// The priority is not one of `High`, `Medium`, or `Low`.
    #[error("invalid priority '{0}', expected High, Medium, or Low")]
    InvalidPriority(String),

    /// The requested sort key does not name a sortable task attribute.
    #[error("unknown sort key '{0}'")]
    UnknownSortKey(String),
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
