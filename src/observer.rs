//! Progress and warning notifications from a pipeline run.
//!
//! The pipeline never touches a terminal or UI directly. Whatever hosts it
//! passes in a [`SearchObserver`]; the CLI uses [`TracingObserver`], tests and
//! library callers that don't care can pass [`NoopObserver`].

use tracing::{info, warn};

/// Sink for per-variant progress and non-fatal warnings.
///
/// Both methods default to doing nothing.
pub trait SearchObserver {
    /// Called before variant `index` (zero-based) of `count` is queried.
    fn on_variant_start(&self, _index: usize, _count: usize, _label: &str) {}

    /// Called when a variant fails and is skipped.
    fn on_warning(&self, _message: &str) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that reports progress and warnings through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_variant_start(&self, index: usize, count: usize, label: &str) {
        info!(step = index + 1, of = count, term = %label, "Searching: \"{}\"...", label);
    }

    fn on_warning(&self, message: &str) {
        warn!(%message, "Search variant skipped");
    }
}
