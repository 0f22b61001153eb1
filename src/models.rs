//! Data models for search results and their exported representation.
//!
//! - [`RawArticle`]: one record as returned by the news provider
//! - [`FilteredArticle`]: a cleaned, deduplicated article ready for display
//! - [`SearchOutcome`]: what a pipeline run hands back to the caller
//! - [`SearchReport`]: a run's outcome stamped with when and how it was made,
//!   used by the exports

use serde::{Deserialize, Serialize};

/// A news record exactly as the provider returned it for one query variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArticle {
    /// The headline, usually with `" - {publisher}"` appended.
    pub title: String,
    /// Canonical link; the primary dedup key.
    pub link: String,
    /// Publisher display name.
    pub publisher: String,
    /// Publication timestamp as provided. Never parsed.
    pub published: String,
}

/// A cleaned article that survived filtering and dedup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilteredArticle {
    /// Cleaned headline with the publisher suffix removed.
    pub title: String,
    /// Cleaned publisher name.
    pub publisher: String,
    pub link: String,
    /// Whether the publisher is on the Kansas outlet list.
    pub is_regional: bool,
    pub published: String,
}

impl FilteredArticle {
    /// Marker placed before the publisher name of regional articles.
    pub fn regional_marker(&self) -> &'static str {
        if self.is_regional { "*" } else { "" }
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Unique articles in the order they survived dedup.
    pub articles: Vec<FilteredArticle>,
    /// Records seen after the link merge and before any filtering.
    pub total_found: usize,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn regional_count(&self) -> usize {
        self.articles.iter().filter(|a| a.is_regional).count()
    }
}

/// A finished search, ready to be written out.
#[derive(Debug, Deserialize, Serialize)]
pub struct SearchReport {
    /// Local date the search ran, `YYYY-MM-DD`.
    pub local_date: String,
    /// Local time the search ran, `HH:MM:SS`.
    pub local_time: String,
    /// Lookback window in days.
    pub days: u32,
    pub total_found: usize,
    pub articles: Vec<FilteredArticle>,
}
