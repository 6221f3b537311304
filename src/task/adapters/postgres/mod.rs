//! `PostgreSQL` adapter for task persistence.
//!
//! Enabled by the `postgres` cargo feature. Filters, relevance ordering, and
//! paging are evaluated in SQL with the same semantics as the in-memory
//! store.

mod models;
mod query;
mod repository;
mod schema;

pub use repository::{PostgresTaskStore, TaskPgPool};
