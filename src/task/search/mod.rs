//! Search and filter engine.
//!
//! Builds record predicates from keyword, status, and trash visibility, and
//! ranks keyword matches by which field matched and where.

mod filter;
mod ranking;

pub use filter::{KeywordFilter, KeywordMatch, SearchTerm, TaskFilter, TaskSort, Visibility};
pub use ranking::{MatchPriority, relevance};
