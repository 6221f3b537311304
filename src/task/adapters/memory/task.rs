//! In-memory task store for tests and embedded use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskQuery, TaskStore, TaskStoreError, TaskStoreResult},
    search::TaskFilter,
};

/// Thread-safe in-memory task store.
///
/// Evaluates filters and sort orders with the search engine's own predicate
/// and ranking functions, so it doubles as the reference for other adapters.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, HashMap<TaskId, Task>>> {
        self.state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, HashMap<TaskId, Task>>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let mut tasks = self.write()?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn find_many(&self, query: &TaskQuery) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.read()?;
        let mut matching: Vec<&Task> = tasks
            .values()
            .filter(|task| query.filter.matches(task))
            .collect();
        matching.sort_by(|left, right| query.sort.compare(left, right));

        let ordered = matching.into_iter().cloned();
        Ok(match query.window {
            Some(window) => window.apply(ordered),
            None => ordered.collect(),
        })
    }

    async fn count(&self, filter: &TaskFilter) -> TaskStoreResult<u64> {
        let tasks = self.read()?;
        let count = tasks.values().filter(|task| filter.matches(task)).count();
        u64::try_from(count).map_err(TaskStoreError::persistence)
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let mut tasks = self.write()?;
        let slot = tasks
            .get_mut(&task.id())
            .ok_or(TaskStoreError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        self.write()?
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskStoreError::NotFound(id))
    }

    async fn count_by_status(
        &self,
        filter: &TaskFilter,
    ) -> TaskStoreResult<Vec<(TaskStatus, u64)>> {
        let tasks = self.read()?;
        let mut groups: HashMap<TaskStatus, u64> = HashMap::new();
        for task in tasks.values().filter(|task| filter.matches(task)) {
            *groups.entry(task.status()).or_default() += 1;
        }
        Ok(groups.into_iter().collect())
    }
}
