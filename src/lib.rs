//! Tasktrack: task lifecycle and search core.
//!
//! This crate provides the domain rules for a single-entity task tracker:
//! validated creation and updates, the status-transition table with its
//! completion bookkeeping, the trash lifecycle, and ranked keyword search
//! with pagination and per-status summaries.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete store implementations (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, search, and aggregation
//! - [`config`]: Paging and suggestion limits
//! - [`telemetry`]: Tracing subscriber bootstrap

pub mod config;
pub mod task;
pub mod telemetry;
