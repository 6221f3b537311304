//! Store port for task persistence, querying, and aggregation.

use crate::task::{
    aggregate::Window,
    domain::{Task, TaskId, TaskStatus},
    search::{TaskFilter, TaskSort},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Filtered, ordered, optionally windowed read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    /// Records to include.
    pub filter: TaskFilter,
    /// Result order.
    pub sort: TaskSort,
    /// Optional skip/limit window applied after ordering.
    pub window: Option<Window>,
}

impl TaskQuery {
    /// Creates an unwindowed query.
    #[must_use]
    pub const fn new(filter: TaskFilter, sort: TaskSort) -> Self {
        Self {
            filter,
            sort,
            window: None,
        }
    }

    /// Restricts the result to a window.
    #[must_use]
    pub fn with_window(mut self, window: Window) -> Self {
        self.window = Some(window);
        self
    }
}

/// Task persistence contract.
///
/// Implementations provide per-call atomicity only; callers must not rely on
/// transactions spanning several calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the task ID already
    /// exists.
    async fn insert(&self, task: &Task) -> TaskStoreResult<()>;

    /// Finds a task by identifier, trashed or not.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Returns matching tasks in the requested order and window.
    async fn find_many(&self, query: &TaskQuery) -> TaskStoreResult<Vec<Task>>;

    /// Counts matching tasks.
    async fn count(&self, filter: &TaskFilter) -> TaskStoreResult<u64>;

    /// Replaces the stored record with the given task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskStoreResult<()>;

    /// Permanently removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskStoreResult<()>;

    /// Counts matching tasks grouped by status.
    ///
    /// Statuses without matches may be omitted.
    async fn count_by_status(&self, filter: &TaskFilter)
    -> TaskStoreResult<Vec<(TaskStatus, u64)>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
