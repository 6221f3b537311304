//! Per-status counts over active tasks.

use crate::task::domain::TaskStatus;
use serde::Serialize;

/// Count of active tasks in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    /// Tasks not yet started.
    pub pending: u64,
    /// Tasks being worked on.
    #[serde(rename = "in-progress")]
    pub in_progress: u64,
    /// Finished tasks.
    pub completed: u64,
    /// Sum of the three counts.
    pub total: u64,
}

impl TaskSummary {
    /// Folds grouped counts into a summary, zero-filling absent statuses.
    #[must_use]
    pub fn from_counts(counts: impl IntoIterator<Item = (TaskStatus, u64)>) -> Self {
        counts
            .into_iter()
            .fold(Self::default(), |mut summary, (status, count)| {
                match status {
                    TaskStatus::Pending => summary.pending += count,
                    TaskStatus::InProgress => summary.in_progress += count,
                    TaskStatus::Completed => summary.completed += count,
                }
                summary.total += count;
                summary
            })
    }

    /// Returns the count for one status.
    #[must_use]
    pub const fn count(&self, status: TaskStatus) -> u64 {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }
}
