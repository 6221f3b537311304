//! Domain model for task lifecycle management.
//!
//! The task domain owns field validation, the status-transition table, and
//! the completion and soft-delete bookkeeping, while keeping every
//! infrastructure concern outside of the domain boundary.

mod error;
mod fields;
mod ids;
mod task;
mod transition;

pub use error::{MalformedTaskId, ParseTaskStatusError, TaskDomainError, TaskValidationError};
pub use fields::{TaskDescription, TaskTitle};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskStatus, TaskUpdate};
pub use transition::{
    LockedEditPolicy, TransitionRule, UpdateMode, UpdatePlan, plan_update, transition_rule,
};
