//! Service layer for task creation, updates, and the trash lifecycle.

use crate::task::{
    domain::{
        Task, TaskDescription, TaskId, TaskStatus, TaskTitle, TaskUpdate, TaskValidationError,
        UpdateMode,
    },
    ports::TaskStore,
    services::{TaskServiceError, TaskServiceResult},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Records a caller-supplied status.
    ///
    /// New tasks always start `pending`; the value is accepted so wire
    /// payloads carrying it still deserialize, and is otherwise ignored.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Raw field changes for an update request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the requested status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns `true` when no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }

    fn status(&self) -> Result<Option<TaskStatus>, TaskValidationError> {
        self.status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()
            .map_err(TaskValidationError::from)
    }

    /// Validates as a replace-style update: description reset to empty when
    /// absent, title and status kept when absent.
    fn into_full_update(self) -> Result<TaskUpdate, TaskValidationError> {
        let status = self.status()?;
        Ok(TaskUpdate {
            title: self.title.as_deref().map(TaskTitle::new).transpose()?,
            description: Some(TaskDescription::new(
                self.description.as_deref().unwrap_or_default(),
            )?),
            status,
        })
    }

    /// Validates as a partial update: only present fields change.
    fn into_partial_update(self) -> Result<TaskUpdate, TaskValidationError> {
        if self.is_empty() {
            return Err(TaskValidationError::EmptyPatch);
        }
        let status = self.status()?;
        Ok(TaskUpdate {
            title: self.title.as_deref().map(TaskTitle::new).transpose()?,
            description: self
                .description
                .as_deref()
                .map(TaskDescription::new)
                .transpose()?,
            status,
        })
    }
}

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates a new pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title or description
    /// is invalid, or [`TaskServiceError::Store`] when persistence fails.
    #[instrument(skip_all)]
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(&request.title)?;
        let description = TaskDescription::new(request.description.unwrap_or_default())?;
        if let Some(ignored) = request.status.as_deref() {
            debug!(requested_status = ignored, "ignoring status on create");
        }

        let task = Task::new(title, description, &*self.clock);
        self.store.insert(&task).await?;
        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Retrieves a task, including trashed ones.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    #[instrument(skip_all, fields(task_id = %id))]
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Replaces a task's editable content.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for invalid fields,
    /// [`TaskServiceError::NotFound`] for missing or trashed
    /// tasks, and [`TaskServiceError::InvalidTransition`] when a completed
    /// task is edited without being reopened or moved to a status other than
    /// `in-progress`.
    #[instrument(skip_all, fields(task_id = %id))]
    pub async fn update_task_full(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        let update = patch.into_full_update()?;
        self.apply(id, update, UpdateMode::Full).await
    }

    /// Changes only the supplied fields of a task.
    ///
    /// Title and description edits against a completed task are dropped
    /// rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for an empty patch or invalid
    /// fields, [`TaskServiceError::NotFound`] for missing or trashed tasks,
    /// and [`TaskServiceError::InvalidTransition`] when a completed task is
    /// moved to a status other than `in-progress`.
    #[instrument(skip_all, fields(task_id = %id))]
    pub async fn update_task_partial(
        &self,
        id: TaskId,
        patch: TaskPatch,
    ) -> TaskServiceResult<Task> {
        let update = patch.into_partial_update()?;
        self.apply(id, update, UpdateMode::Partial).await
    }

    /// Moves a task to the trash.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    #[instrument(skip_all, fields(task_id = %id))]
    pub async fn soft_delete_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self.get_task(id).await?;
        if task.soft_delete(&*self.clock) {
            self.store.update(&task).await?;
            info!("task moved to trash");
        }
        Ok(task)
    }

    /// Takes a task out of the trash.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    #[instrument(skip_all, fields(task_id = %id))]
    pub async fn restore_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self.get_task(id).await?;
        if task.restore(&*self.clock) {
            self.store.update(&task).await?;
            info!("task restored");
        }
        Ok(task)
    }

    /// Permanently removes a task, trashed or not.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    #[instrument(skip_all, fields(task_id = %id))]
    pub async fn hard_delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        self.store.delete(id).await?;
        info!("task permanently deleted");
        Ok(())
    }

    async fn apply(
        &self,
        id: TaskId,
        update: TaskUpdate,
        mode: UpdateMode,
    ) -> TaskServiceResult<Task> {
        let mut task = self
            .store
            .find_by_id(id)
            .await?
            .filter(|task| !task.is_deleted())
            .ok_or(TaskServiceError::NotFound(id))?;

        match task.apply_update(update, mode, &*self.clock) {
            Ok(true) => {
                self.store.update(&task).await?;
                info!(status = %task.status(), "task updated");
            }
            Ok(false) => debug!("update left task unchanged"),
            Err(err) => {
                warn!(error = %err, "update rejected");
                return Err(err.into());
            }
        }
        Ok(task)
    }
}
