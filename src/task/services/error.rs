//! Service-boundary error taxonomy.

use crate::task::{
    domain::{MalformedTaskId, TaskDomainError, TaskId, TaskValidationError},
    ports::TaskStoreError,
};
use thiserror::Error;

/// Stable classification of service failures for transport mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or missing input.
    Validation,
    /// The referenced task does not exist.
    NotFound,
    /// A status-transition rule was violated.
    InvalidTransition,
    /// The store failed or the identifier could not be used.
    Store,
}

impl ErrorKind {
    /// Returns the canonical snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::InvalidTransition => "invalid_transition",
            Self::Store => "store",
        }
    }

    /// Returns `true` when the caller is at fault.
    ///
    /// Not-found is reported separately as an absent resource.
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        matches!(self, Self::Validation | Self::InvalidTransition)
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),

    /// No task exists with the identifier (or it is trashed, for updates).
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The transition table rejected the request.
    #[error(transparent)]
    InvalidTransition(TaskDomainError),

    /// The identifier could not be parsed.
    #[error(transparent)]
    MalformedId(#[from] MalformedTaskId),

    /// Store operation failed.
    #[error(transparent)]
    Store(TaskStoreError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

impl TaskServiceError {
    /// Returns the stable kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidTransition(_) => ErrorKind::InvalidTransition,
            Self::MalformedId(_) | Self::Store(_) => ErrorKind::Store,
        }
    }
}

impl From<TaskDomainError> for TaskServiceError {
    fn from(value: TaskDomainError) -> Self {
        match value {
            TaskDomainError::Validation(err) => Self::Validation(err),
            TaskDomainError::InconsistentRecord { .. } => {
                Self::Store(TaskStoreError::persistence(value))
            }
            TaskDomainError::CompletedRevertOnly { .. } | TaskDomainError::CompletedLocked(_) => {
                Self::InvalidTransition(value)
            }
        }
    }
}

impl From<TaskStoreError> for TaskServiceError {
    fn from(value: TaskStoreError) -> Self {
        match value {
            TaskStoreError::NotFound(task_id) => Self::NotFound(task_id),
            other => Self::Store(other),
        }
    }
}
