//! News search providers.
//!
//! The pipeline only knows about the [`NewsProvider`] trait: hand it a
//! [`ProviderQuery`], get back the provider's records in the provider's order.
//!
//! | Provider | Module | Method |
//! |----------|--------|--------|
//! | Google News | [`google_news`] | RSS search endpoint |
//!
//! [`retry::RetryProvider`] wraps any provider with exponential backoff.
//!
//! A provider may fail for any reason (network, HTTP status, malformed
//! feed). The pipeline treats such failures as non-fatal for the variant.

pub mod google_news;
pub mod retry;

use crate::models::RawArticle;
use crate::query::{LookbackWindow, QuerySpec};
use std::error::Error;

/// One query against a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderQuery<'a> {
    pub term: &'a str,
    pub window: LookbackWindow,
    pub country: &'a str,
    pub language: &'a str,
    pub max_results: usize,
}

impl<'a> ProviderQuery<'a> {
    /// The query for `term` under a run's settings.
    pub fn for_term(spec: &'a QuerySpec, term: &'a str) -> Self {
        Self {
            term,
            window: spec.window,
            country: &spec.country,
            language: &spec.language,
            max_results: spec.max_results,
        }
    }
}

/// A source of news records for a search term.
pub trait NewsProvider {
    /// Run one search and return at most `query.max_results` records.
    async fn search(&self, query: &ProviderQuery<'_>) -> Result<Vec<RawArticle>, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_for_term() {
        let spec = QuerySpec::from_days(14, true, true).unwrap();
        let query = ProviderQuery::for_term(&spec, &spec.terms[3]);
        assert_eq!(query.term, "Sen. Moran");
        assert_eq!(query.window, LookbackWindow::TwoWeeks);
        assert_eq!(query.country, "US");
        assert_eq!(query.language, "en");
        assert_eq!(query.max_results, 100);
    }
}
