//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use rstest::fixture;
use tasktrack::{
    config::TaskConfig,
    task::{
        adapters::{clock::SteppingClock, memory::InMemoryTaskStore},
        domain::{Task, TaskDescription, TaskTitle},
        services::{TaskLifecycleService, TaskQueryService},
    },
};

/// Lifecycle service over the in-memory store.
pub type TestLifecycle = TaskLifecycleService<InMemoryTaskStore, SteppingClock>;

/// Query service over the in-memory store.
pub type TestQuery = TaskQueryService<InMemoryTaskStore>;

/// Both services sharing one store.
pub struct Harness {
    pub store: Arc<InMemoryTaskStore>,
    pub clock: Arc<SteppingClock>,
    pub lifecycle: TestLifecycle,
    pub query: TestQuery,
}

/// Builds a harness with default configuration.
#[fixture]
pub fn harness() -> Harness {
    let store = Arc::new(InMemoryTaskStore::new());
    let clock = Arc::new(SteppingClock::default());
    Harness {
        lifecycle: TaskLifecycleService::new(Arc::clone(&store), Arc::clone(&clock)),
        query: TaskQueryService::new(Arc::clone(&store), TaskConfig::default()),
        store,
        clock,
    }
}

/// Builds an unsaved task with the given text fields.
///
/// # Errors
///
/// Returns an error when the title or description is invalid.
pub fn new_task(clock: &SteppingClock, title: &str, description: &str) -> eyre::Result<Task> {
    Ok(Task::new(
        TaskTitle::new(title)?,
        TaskDescription::new(description)?,
        clock,
    ))
}
