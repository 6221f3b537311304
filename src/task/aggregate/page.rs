//! Page/limit windowing over ordered result sets.

use crate::config::TaskConfig;
use serde::Serialize;

/// Offset window handed to a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Number of leading records to skip.
    pub skip: u64,
    /// Maximum number of records to return.
    pub limit: u64,
}

impl Window {
    /// Applies the window to an already ordered sequence.
    pub fn apply<T>(self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        items.into_iter().skip(skip).take(limit).collect()
    }
}

/// Bounded page request.
///
/// Pages and limits below 1 fall back to the defaults and the limit is
/// capped at [`TaskConfig::max_page_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Creates a bounded request from numeric values.
    #[must_use]
    pub fn new(page: u64, limit: u64, config: &TaskConfig) -> Self {
        let bounded_limit = if limit == 0 {
            config.default_page_size
        } else {
            limit.min(config.max_page_size)
        };
        Self {
            page: page.max(1),
            limit: bounded_limit.max(1),
        }
    }

    /// Parses raw query-string values.
    ///
    /// Missing, non-numeric, and non-positive values use page 1 and the
    /// configured default limit.
    #[must_use]
    pub fn parse(page: Option<&str>, limit: Option<&str>, config: &TaskConfig) -> Self {
        Self::new(
            parse_positive(page).unwrap_or(1),
            parse_positive(limit).unwrap_or(config.default_page_size),
            config,
        )
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns the store window for this page.
    #[must_use]
    pub const fn window(&self) -> Window {
        Window {
            skip: (self.page - 1).saturating_mul(self.limit),
            limit: self.limit,
        }
    }

    /// Describes this page within a result set of `total` records.
    #[must_use]
    pub const fn page_info(&self, total: u64) -> PageInfo {
        PageInfo {
            current: self.page,
            pages: total.div_ceil(self.limit),
            total,
        }
    }
}

fn parse_positive(value: Option<&str>) -> Option<u64> {
    value
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|parsed| *parsed > 0)
}

/// Position of a page within its result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// 1-based page number.
    pub current: u64,
    /// Total number of pages.
    pub pages: u64,
    /// Total number of matching records.
    pub total: u64,
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Records on this page, in result order.
    pub items: Vec<T>,
    /// Paging metadata.
    pub pagination: PageInfo,
}
