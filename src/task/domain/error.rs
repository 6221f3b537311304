//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Field-level validation failures for task input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The title exceeds the character limit.
    #[error("task title is {actual} characters, maximum is {max}")]
    TitleTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Length of the rejected title in characters.
        actual: usize,
    },

    /// The description exceeds the character limit.
    #[error("task description is {actual} characters, maximum is {max}")]
    DescriptionTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Length of the rejected description in characters.
        actual: usize,
    },

    /// The status value is not one of the known statuses.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// A partial update carried no fields.
    #[error("no fields provided")]
    EmptyPatch,
}

/// Errors raised by task aggregate operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// Input failed field validation.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),

    /// A completed task was asked to move somewhere other than `in-progress`.
    #[error("task {task_id}: completed tasks can only be reverted to in-progress, not {requested}")]
    CompletedRevertOnly {
        /// Task that rejected the transition.
        task_id: TaskId,
        /// Status the caller asked for.
        requested: TaskStatus,
    },

    /// A completed task was asked to change content without reopening it.
    #[error("task {0}: completed tasks cannot be edited")]
    CompletedLocked(TaskId),

    /// A persisted record breaks a lifecycle invariant.
    #[error("task {task_id} is inconsistent: {reason}")]
    InconsistentRecord {
        /// Task whose stored state is inconsistent.
        task_id: TaskId,
        /// Which invariant the record breaks.
        reason: &'static str,
    },
}

impl TaskDomainError {
    /// Returns `true` for status-transition rule violations.
    #[must_use]
    pub const fn is_transition(&self) -> bool {
        matches!(
            self,
            Self::CompletedRevertOnly { .. } | Self::CompletedLocked(_)
        )
    }
}

/// Error returned while parsing task statuses from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}, expected pending, in-progress or completed")]
pub struct ParseTaskStatusError(pub String);

/// Error returned when a task identifier cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed task identifier: {0}")]
pub struct MalformedTaskId(pub String);
