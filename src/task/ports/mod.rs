//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{TaskQuery, TaskStore, TaskStoreError, TaskStoreResult};
#[cfg(test)]
pub use repository::MockTaskStore;
