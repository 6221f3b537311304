//! Shared helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use std::env;
use tasktrack::task::adapters::postgres::PostgresTaskStore;
use uuid::Uuid;

/// Boxed error type for test setup.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Environment variable naming the test server.
pub const DATABASE_URL_ENV: &str = "TASKTRACK_TEST_DATABASE_URL";

/// SQL to create the task table.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../migrations/2026-01-15-000000_create_tasks/up.sql");

/// Pins every pooled connection to one schema.
#[derive(Debug)]
struct SearchPath(String);

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for SearchPath {
    fn on_acquire(&self, connection: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!("SET search_path TO {}", self.0))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Store bound to a freshly migrated schema.
pub struct PreparedStore {
    /// Store under test.
    pub store: PostgresTaskStore,
    url: String,
    schema: String,
}

impl Drop for PreparedStore {
    fn drop(&mut self) {
        if let Ok(mut connection) = PgConnection::establish(&self.url) {
            let _ = connection.batch_execute(&format!("DROP SCHEMA {} CASCADE", self.schema));
        }
    }
}

/// Creates a schema, applies the migration, and builds a store over it.
///
/// Returns `Ok(None)` when no test server is configured.
///
/// # Errors
///
/// Returns an error if the connection, migration, or pool setup fails.
pub fn prepare_store() -> Result<Option<PreparedStore>, BoxError> {
    let Ok(url) = env::var(DATABASE_URL_ENV) else {
        return Ok(None);
    };
    let schema = format!("tasktrack_test_{}", Uuid::new_v4().simple());

    let mut connection = PgConnection::establish(&url)?;
    connection.batch_execute(&format!(
        "CREATE SCHEMA {schema}; SET search_path TO {schema};"
    ))?;
    connection.batch_execute(CREATE_TASKS_SQL)?;

    let pool = Pool::builder()
        .max_size(2)
        .connection_customizer(Box::new(SearchPath(schema.clone())))
        .build(ConnectionManager::<PgConnection>::new(url.clone()))?;

    Ok(Some(PreparedStore {
        store: PostgresTaskStore::new(pool),
        url,
        schema,
    }))
}
