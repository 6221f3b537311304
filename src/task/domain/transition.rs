//! Explicit status-transition table shared by every update path.
//!
//! Rows are the current status, columns the requested status. Both the
//! replace-style and the partial update consult the same table; they differ
//! only in how a content edit on a locked (completed) task is treated when no
//! status change accompanies it.

use super::{TaskDomainError, TaskId, TaskStatus};

/// Outcome of moving a task from one status to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRule {
    /// The move is allowed and content edits in the same request apply.
    Allow,
    /// The move is allowed but content edits in the same request are dropped.
    AllowDroppingEdits,
    /// The move is rejected: completed tasks only revert to `in-progress`.
    RejectRevertOnly,
}

use TransitionRule::{Allow, AllowDroppingEdits, RejectRevertOnly};

/// Indexed by `[from.index()][to.index()]` in [`TaskStatus::ALL`] order.
const TRANSITIONS: [[TransitionRule; 3]; 3] = [
    // from pending
    [Allow, Allow, Allow],
    // from in-progress
    [Allow, Allow, Allow],
    // from completed
    [RejectRevertOnly, AllowDroppingEdits, RejectRevertOnly],
];

/// Which update operation is being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Replace-style update: editable content is supplied in full.
    Full,
    /// Patch-style update: only supplied fields change.
    Partial,
}

impl UpdateMode {
    /// How content edits on a locked task are handled when the request does
    /// not change the status.
    #[must_use]
    pub const fn locked_edit_policy(self) -> LockedEditPolicy {
        match self {
            Self::Full => LockedEditPolicy::Reject,
            Self::Partial => LockedEditPolicy::Drop,
        }
    }
}

/// Treatment of content edits against a locked task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockedEditPolicy {
    /// Fail the whole request.
    Reject,
    /// Silently discard the edits.
    Drop,
}

/// Resolved effect of an update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatePlan {
    /// Status to write, if the request changes it.
    pub status: Option<TaskStatus>,
    /// Whether title/description edits should be applied.
    pub apply_edits: bool,
}

/// Looks up the table entry for a status move.
#[must_use]
pub const fn transition_rule(from: TaskStatus, to: TaskStatus) -> TransitionRule {
    TRANSITIONS[from.index()][to.index()]
}

/// Plans an update against the transition table.
///
/// # Errors
///
/// Returns [`TaskDomainError::CompletedRevertOnly`] when the requested status
/// is not reachable from `current`, or [`TaskDomainError::CompletedLocked`]
/// when a replace-style update edits a locked task without reopening it.
pub const fn plan_update(
    task_id: TaskId,
    current: TaskStatus,
    requested: Option<TaskStatus>,
    has_edits: bool,
    mode: UpdateMode,
) -> Result<UpdatePlan, TaskDomainError> {
    if let Some(target) = requested {
        return match transition_rule(current, target) {
            Allow => Ok(UpdatePlan {
                status: Some(target),
                apply_edits: has_edits,
            }),
            AllowDroppingEdits => Ok(UpdatePlan {
                status: Some(target),
                apply_edits: false,
            }),
            RejectRevertOnly => Err(TaskDomainError::CompletedRevertOnly {
                task_id,
                requested: target,
            }),
        };
    }

    if !current.locks_content() || !has_edits {
        return Ok(UpdatePlan {
            status: None,
            apply_edits: has_edits,
        });
    }

    match mode.locked_edit_policy() {
        LockedEditPolicy::Reject => Err(TaskDomainError::CompletedLocked(task_id)),
        LockedEditPolicy::Drop => Ok(UpdatePlan {
            status: None,
            apply_edits: false,
        }),
    }
}
