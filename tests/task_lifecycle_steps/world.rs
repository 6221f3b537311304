//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use tasktrack::{
    config::TaskConfig,
    task::{
        adapters::{clock::SteppingClock, memory::InMemoryTaskStore},
        domain::Task,
        services::{TaskLifecycleService, TaskQueryService, TaskServiceError},
    },
};

/// Lifecycle service type used by the BDD world.
pub type TestLifecycle = TaskLifecycleService<InMemoryTaskStore, SteppingClock>;

/// Query service type used by the BDD world.
pub type TestQuery = TaskQueryService<InMemoryTaskStore>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub lifecycle: TestLifecycle,
    pub query: TestQuery,
    pub current_task: Option<Task>,
    pub last_update: Option<Result<Task, TaskServiceError>>,
    pub search_results: Vec<Task>,
}

impl TaskLifecycleWorld {
    /// Creates a world backed by an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTaskStore::new());
        Self {
            lifecycle: TaskLifecycleService::new(
                Arc::clone(&store),
                Arc::new(SteppingClock::default()),
            ),
            query: TaskQueryService::new(store, TaskConfig::default()),
            current_task: None,
            last_update: None,
            search_results: Vec::new(),
        }
    }

    /// Returns the task the scenario is working on.
    pub fn current(&self) -> Result<&Task, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
