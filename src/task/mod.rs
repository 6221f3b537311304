//! Task lifecycle management for Tasktrack.
//!
//! This module creates, updates, trashes, restores, and permanently removes
//! task records, enforcing the status-transition table on every update path.
//! Listings combine a visibility/status/keyword predicate with relevance
//! ranking and are paged and summarised by the aggregator. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Search predicates and ranking in [`search`]
//! - Paging and summaries in [`aggregate`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod aggregate;
pub mod domain;
pub mod ports;
pub mod search;
pub mod services;

#[cfg(test)]
mod tests;
