//! Filter predicates and sort orders over task records.

use super::relevance;
use crate::task::domain::{Task, TaskStatus};
use std::cmp::Ordering;

/// Which side of the trash a query looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Records that are not soft-deleted.
    #[default]
    Active,
    /// Soft-deleted records only.
    Trashed,
    /// Every record.
    All,
}

impl Visibility {
    /// Maps the `include_deleted` listing flag to a visibility.
    #[must_use]
    pub const fn from_include_deleted(include_deleted: bool) -> Self {
        if include_deleted { Self::All } else { Self::Active }
    }

    /// Returns `true` when a record with the given flag is visible.
    #[must_use]
    pub const fn admits(self, is_deleted: bool) -> bool {
        match self {
            Self::Active => !is_deleted,
            Self::Trashed => is_deleted,
            Self::All => true,
        }
    }
}

/// Trimmed, non-empty keyword with its case-folded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// Normalizes an optional keyword; blank input yields `None`.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Option<Self> {
        let trimmed = value?.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            raw: trimmed.to_owned(),
            folded: trimmed.to_lowercase(),
        })
    }

    /// Returns the trimmed keyword as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the lowercase keyword used for matching.
    #[must_use]
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

/// How a keyword must appear in a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordMatch {
    /// Anywhere in the field.
    Contains,
    /// At the start of the field.
    Prefix,
}

/// Keyword restriction over title and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFilter {
    /// Normalized keyword.
    pub term: SearchTerm,
    /// Match position requirement.
    pub mode: KeywordMatch,
}

impl KeywordFilter {
    /// Returns `true` when the title or description satisfies the keyword.
    #[must_use]
    pub fn matches(&self, title: &str, description: &str) -> bool {
        let needle = self.term.folded();
        let folded_title = title.to_lowercase();
        let folded_description = description.to_lowercase();
        match self.mode {
            KeywordMatch::Contains => {
                folded_title.contains(needle) || folded_description.contains(needle)
            }
            KeywordMatch::Prefix => {
                folded_title.starts_with(needle) || folded_description.starts_with(needle)
            }
        }
    }
}

/// Conjunctive predicate over task records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Soft-delete visibility.
    pub visibility: Visibility,
    /// Optional status restriction.
    pub status: Option<TaskStatus>,
    /// Optional keyword restriction.
    pub keyword: Option<KeywordFilter>,
}

impl TaskFilter {
    /// Creates an unrestricted filter with the given visibility.
    #[must_use]
    pub const fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            status: None,
            keyword: None,
        }
    }

    /// Restricts to one status when `status` is set.
    #[must_use]
    pub fn with_status(mut self, status: Option<TaskStatus>) -> Self {
        self.status = status;
        self
    }

    /// Restricts to records matching `term` when it is set.
    #[must_use]
    pub fn with_keyword(mut self, term: Option<SearchTerm>, mode: KeywordMatch) -> Self {
        self.keyword = term.map(|term| KeywordFilter { term, mode });
        self
    }

    /// Evaluates the predicate against one record.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if !self.visibility.admits(task.is_deleted()) {
            return false;
        }
        if self.status.is_some_and(|status| status != task.status()) {
            return false;
        }
        self.keyword.as_ref().is_none_or(|keyword| {
            keyword.matches(task.title().as_str(), task.description().as_str())
        })
    }
}

/// Result ordering for task listings.
///
/// Every order breaks remaining ties on the task identifier so results are
/// stable across adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSort {
    /// Newest first.
    CreatedDesc,
    /// Most recently trashed first.
    DeletedDesc,
    /// Highest relevance first, then newest first.
    Relevance(SearchTerm),
}

impl TaskSort {
    /// Chooses the listing order for an optional keyword.
    #[must_use]
    pub fn for_keyword(term: Option<&SearchTerm>) -> Self {
        term.map_or(Self::CreatedDesc, |term| Self::Relevance(term.clone()))
    }

    /// Compares two records under this order.
    #[must_use]
    pub fn compare(&self, left: &Task, right: &Task) -> Ordering {
        let primary = match self {
            Self::CreatedDesc => Ordering::Equal,
            Self::DeletedDesc => right.deleted_at().cmp(&left.deleted_at()),
            Self::Relevance(term) => {
                let left_score =
                    relevance(term, left.title().as_str(), left.description().as_str());
                let right_score =
                    relevance(term, right.title().as_str(), right.description().as_str());
                right_score.cmp(&left_score)
            }
        };

        primary
            .then_with(|| right.created_at().cmp(&left.created_at()))
            .then_with(|| left.id().cmp(&right.id()))
    }
}
