//! Task aggregate root and related lifecycle types.

use super::{
    ParseTaskStatusError, TaskDescription, TaskDomainError, TaskId, TaskTitle, UpdateMode,
    plan_update,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Completed,
}

impl TaskStatus {
    /// Every status, in transition-table order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` when tasks in this status reject content edits.
    #[must_use]
    pub const fn locks_content(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Parses an optional filter value, ignoring anything unrecognised.
    #[must_use]
    pub fn parse_filter(value: Option<&str>) -> Option<Self> {
        value.and_then(|raw| Self::try_from(raw).ok())
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task aggregate root.
///
/// Fields are private so the two timestamp invariants hold for every value:
/// `completed_at` is set iff the status is completed, and `deleted_at` is set
/// iff the task is in the trash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    status: TaskStatus,
    is_deleted: bool,
    deleted_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted soft-delete flag.
    pub is_deleted: bool,
    /// Persisted soft-delete timestamp.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Persisted completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Validated field changes for an existing task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Replacement description.
    pub description: Option<TaskDescription>,
    /// Requested status.
    pub status: Option<TaskStatus>,
}

impl TaskUpdate {
    /// Returns `true` when the update carries title or description edits.
    #[must_use]
    pub const fn has_edits(&self) -> bool {
        self.title.is_some() || self.description.is_some()
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.has_edits() && self.status.is_none()
    }
}

impl Task {
    /// Creates a new pending task.
    #[must_use]
    pub fn new(title: TaskTitle, description: TaskDescription, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title,
            description,
            status: TaskStatus::Pending,
            is_deleted: false,
            deleted_at: None,
            completed_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InconsistentRecord`] when the stored
    /// timestamps contradict the status or the soft-delete flag.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TaskDomainError> {
        if data.completed_at.is_some() != matches!(data.status, TaskStatus::Completed) {
            return Err(TaskDomainError::InconsistentRecord {
                task_id: data.id,
                reason: "completed_at must be set exactly when the status is completed",
            });
        }
        if data.deleted_at.is_some() != data.is_deleted {
            return Err(TaskDomainError::InconsistentRecord {
                task_id: data.id,
                reason: "deleted_at must be set exactly when the task is deleted",
            });
        }

        Ok(Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            is_deleted: data.is_deleted,
            deleted_at: data.deleted_at,
            completed_at: data.completed_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns `true` when the task is in the trash.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Returns the soft-delete timestamp, if trashed.
    #[must_use]
    pub const fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to `target` through the transition table.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CompletedRevertOnly`] when the table rejects
    /// the move.
    pub fn transition_to(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let plan = plan_update(self.id, self.status, Some(target), false, UpdateMode::Partial)?;
        if let Some(status) = plan.status {
            self.write_status(status, clock);
        }
        self.touch(clock);
        Ok(())
    }

    /// Applies validated field changes under the given update mode.
    ///
    /// Returns `true` when anything was written. Edits dropped by the
    /// transition table do not count as writes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the transition table rejects the
    /// request.
    pub fn apply_update(
        &mut self,
        update: TaskUpdate,
        mode: UpdateMode,
        clock: &impl Clock,
    ) -> Result<bool, TaskDomainError> {
        let plan = plan_update(
            self.id,
            self.status,
            update.status,
            update.has_edits(),
            mode,
        )?;

        let mut changed = false;
        if plan.apply_edits {
            if let Some(title) = update.title {
                self.title = title;
                changed = true;
            }
            if let Some(description) = update.description {
                self.description = description;
                changed = true;
            }
        }
        if let Some(status) = plan.status {
            self.write_status(status, clock);
            changed = true;
        }
        if changed {
            self.touch(clock);
        }
        Ok(changed)
    }

    /// Moves the task to the trash. Returns `false` if it was already there.
    pub fn soft_delete(&mut self, clock: &impl Clock) -> bool {
        if self.is_deleted {
            return false;
        }
        let timestamp = clock.utc();
        self.is_deleted = true;
        self.deleted_at = Some(timestamp);
        self.updated_at = timestamp;
        true
    }

    /// Takes the task out of the trash. Returns `false` if it was not there.
    pub fn restore(&mut self, clock: &impl Clock) -> bool {
        if !self.is_deleted {
            return false;
        }
        self.is_deleted = false;
        self.deleted_at = None;
        self.touch(clock);
        true
    }

    /// Writes a status and keeps `completed_at` in step with it.
    fn write_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        if status == TaskStatus::Completed {
            if self.completed_at.is_none() {
                self.completed_at = Some(clock.utc());
            }
        } else {
            self.completed_at = None;
        }
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
