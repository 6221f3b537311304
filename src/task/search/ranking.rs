//! Relevance scoring for keyword matches.
//!
//! Scoring is a pure function over the folded search term and the two text
//! fields, so every store adapter ranks identically regardless of how it
//! evaluates the predicate.

use super::SearchTerm;
use serde::Serialize;

/// Relevance of a keyword match; higher variants rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPriority {
    /// The description contains the term past its start.
    DescriptionContains,
    /// The title contains the term past its start.
    TitleContains,
    /// The description starts with the term.
    DescriptionPrefix,
    /// The title starts with the term.
    TitlePrefix,
}

impl MatchPriority {
    /// Returns the integer priority score (0 to 3).
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::DescriptionContains => 0,
            Self::TitleContains => 1,
            Self::DescriptionPrefix => 2,
            Self::TitlePrefix => 3,
        }
    }
}

/// Scores a record against a search term.
///
/// Returns `None` when neither field contains the term.
#[must_use]
pub fn relevance(term: &SearchTerm, title: &str, description: &str) -> Option<MatchPriority> {
    let needle = term.folded();
    let folded_title = title.to_lowercase();
    let folded_description = description.to_lowercase();

    if folded_title.starts_with(needle) {
        Some(MatchPriority::TitlePrefix)
    } else if folded_description.starts_with(needle) {
        Some(MatchPriority::DescriptionPrefix)
    } else if folded_title.contains(needle) {
        Some(MatchPriority::TitleContains)
    } else if folded_description.contains(needle) {
        Some(MatchPriority::DescriptionContains)
    } else {
        None
    }
}
