//! Application services for task lifecycle and query orchestration.

mod error;
mod lifecycle;
mod query;

pub use error::{ErrorKind, TaskServiceError, TaskServiceResult};
pub use lifecycle::{CreateTaskRequest, TaskLifecycleService, TaskPatch};
pub use query::{Suggestion, SuggestionMatch, TaskListRequest, TaskQueryService};
