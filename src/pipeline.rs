//! The aggregation and filter pipeline.
//!
//! A run queries every name variant in order, merges the results while
//! dropping repeated links, applies the source filters, cleans titles and
//! publisher names, drops repeated cleaned titles, and tags Kansas outlets.
//!
//! ```text
//! variants ──query──▶ merge (unique link) ──▶ source filters
//!                        │                        │
//!                   total_found             clean ─▶ unique title ─▶ tag
//! ```
//!
//! A variant that fails is reported to the observer and contributes nothing.
//! Only an unsupported lookback window is a hard error, and it is raised
//! before the first query.

use crate::error::SearchError;
use crate::models::{FilteredArticle, RawArticle, SearchOutcome};
use crate::observer::SearchObserver;
use crate::providers::{NewsProvider, ProviderQuery};
use crate::query::{EXCLUDED_SOURCE, GOV_MARKER, QuerySpec};
use crate::utils::{clean_text, is_kansas_outlet, strip_publisher_suffix};
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use tracing::{debug, info, instrument};

/// Validate the run parameters and search.
///
/// # Errors
///
/// [`SearchError::InvalidConfiguration`] if `days` is not 1, 3, 7, 14 or 30.
/// Nothing is queried in that case.
pub async fn run<P>(
    provider: &P,
    days: u32,
    exclude_gov: bool,
    exclude_named_source: bool,
    observer: &dyn SearchObserver,
) -> Result<SearchOutcome, SearchError>
where
    P: NewsProvider,
{
    let spec = QuerySpec::from_days(days, exclude_gov, exclude_named_source)?;
    Ok(run_with_spec(provider, &spec, observer).await)
}

/// Search with an already validated [`QuerySpec`].
#[instrument(
    level = "info",
    skip_all,
    fields(days = spec.window.days(), exclude_gov = spec.exclude_gov, exclude_named_source = spec.exclude_named_source)
)]
pub async fn run_with_spec<P>(
    provider: &P,
    spec: &QuerySpec,
    observer: &dyn SearchObserver,
) -> SearchOutcome
where
    P: NewsProvider,
{
    let merged = collect_variants(provider, spec, observer).await;
    let total_found = merged.len();

    let articles = filter_and_dedupe(merged, spec);

    info!(
        unique = articles.len(),
        total = total_found,
        regional = articles.iter().filter(|a| a.is_regional).count(),
        "Search complete"
    );

    SearchOutcome {
        articles,
        total_found,
    }
}

/// Query every variant in order and merge the results, first link wins.
async fn collect_variants<P>(
    provider: &P,
    spec: &QuerySpec,
    observer: &dyn SearchObserver,
) -> Vec<RawArticle>
where
    P: NewsProvider,
{
    let count = spec.terms.len();

    let per_variant: Vec<Vec<RawArticle>> = stream::iter(spec.terms.iter().enumerate())
        .then(|(i, term)| async move {
            observer.on_variant_start(i, count, term);
            let query = ProviderQuery::for_term(spec, term);
            match provider.search(&query).await {
                Ok(results) => {
                    debug!(index = i, %term, count = results.len(), "Variant returned results");
                    results
                }
                Err(e) => {
                    let err = SearchError::ProviderQuery {
                        term: term.clone(),
                        message: e.to_string(),
                    };
                    debug!(index = i, %term, error = %e, "Variant failed; skipping");
                    observer.on_warning(&err.to_string());
                    Vec::new()
                }
            }
        })
        .collect()
        .await;

    per_variant
        .into_iter()
        .flatten()
        .unique_by(|a| a.link.clone())
        .collect()
}

/// Apply source filters, clean, drop repeated titles, and tag regional outlets.
pub fn filter_and_dedupe(merged: Vec<RawArticle>, spec: &QuerySpec) -> Vec<FilteredArticle> {
    merged
        .into_iter()
        .filter(|a| !is_excluded(&a.publisher, spec))
        .map(clean_article)
        .unique_by(|a| a.title.clone())
        .collect()
}

/// Whether a publisher is dropped under the run's filter switches.
pub fn is_excluded(publisher: &str, spec: &QuerySpec) -> bool {
    (spec.exclude_gov && publisher.contains(GOV_MARKER))
        || (spec.exclude_named_source && publisher.contains(EXCLUDED_SOURCE))
}

fn clean_article(raw: RawArticle) -> FilteredArticle {
    let title = clean_text(strip_publisher_suffix(&raw.title, &raw.publisher));
    FilteredArticle {
        title,
        publisher: clean_text(&raw.publisher),
        is_regional: is_kansas_outlet(&raw.publisher),
        link: raw.link,
        published: raw.published,
    }
}
