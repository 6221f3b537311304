//! Pagination and statistics over query results.

mod page;
mod summary;

pub use page::{Page, PageInfo, PageRequest, Window};
pub use summary::TaskSummary;
