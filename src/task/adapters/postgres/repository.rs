//! `PostgreSQL` store implementation for task persistence.

use super::{
    models::{CountRow, StatusCountRow, TaskRecord, TaskRow},
    query::{count_tasks, count_tasks_by_status, select_tasks},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskDescription, TaskId, TaskStatus, TaskTitle},
    ports::{TaskQuery, TaskStore, TaskStoreError, TaskStoreResult},
    search::TaskFilter,
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by the task store.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let task_id = task.id();
        let record = to_record(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&record)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskStoreError::DuplicateTask(task_id)
                    }
                    _ => TaskStoreError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_many(&self, query: &TaskQuery) -> TaskStoreResult<Vec<Task>> {
        let statement = select_tasks(query);
        self.run_blocking(move |connection| {
            let rows = statement
                .into_query()
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn count(&self, filter: &TaskFilter) -> TaskStoreResult<u64> {
        let statement = count_tasks(filter);
        self.run_blocking(move |connection| {
            let row = statement
                .into_query()
                .get_result::<CountRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            u64::try_from(row.count).map_err(TaskStoreError::persistence)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let task_id = task.id();
        let record = to_record(task);

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(task_id.into_inner()))
                .set(&record)
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            if affected == 0 {
                return Err(TaskStoreError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            if affected == 0 {
                return Err(TaskStoreError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn count_by_status(
        &self,
        filter: &TaskFilter,
    ) -> TaskStoreResult<Vec<(TaskStatus, u64)>> {
        let statement = count_tasks_by_status(filter);
        self.run_blocking(move |connection| {
            let rows = statement
                .into_query()
                .load::<StatusCountRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter()
                .map(|row| {
                    let status = TaskStatus::try_from(row.status.as_str())
                        .map_err(TaskStoreError::persistence)?;
                    let count = u64::try_from(row.count).map_err(TaskStoreError::persistence)?;
                    Ok((status, count))
                })
                .collect()
        })
        .await
    }
}

fn to_record(task: &Task) -> TaskRecord {
    TaskRecord {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        is_deleted: task.is_deleted(),
        deleted_at: task.deleted_at(),
        completed_at: task.completed_at(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let data = PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        title: TaskTitle::new(&row.title).map_err(TaskStoreError::persistence)?,
        description: TaskDescription::new(&row.description)
            .map_err(TaskStoreError::persistence)?,
        status: TaskStatus::try_from(row.status.as_str()).map_err(TaskStoreError::persistence)?,
        is_deleted: row.is_deleted,
        deleted_at: row.deleted_at,
        completed_at: row.completed_at,
        created_at: row.created_at,
        updated_at: row.updated_at,
    };
    Task::from_persisted(data).map_err(TaskStoreError::persistence)
}
