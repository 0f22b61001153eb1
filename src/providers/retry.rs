//! Exponential backoff for provider queries.
//!
//! [`RetryProvider`] wraps any [`NewsProvider`] and retries failed searches.
//! The delay before retry `n` is
//!
//! ```text
//! delay = min(base_delay * 2^(n-1), max_delay) + random_jitter(0..=250ms)
//! ```
//!
//! When retries run out the last error is returned, and the pipeline records
//! the variant as skipped.

use super::{NewsProvider, ProviderQuery};
use crate::models::RawArticle;
use rand::{Rng, rng};
use std::error::Error;
use std::fmt;
use std::time::{Duration as StdDuration, Instant};
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

pub struct RetryProvider<P> {
    /// The provider doing the actual search.
    inner: P,
    /// Attempts after the first failure before giving up.
    max_retries: usize,
    /// Initial delay between retries (doubles with each attempt).
    base_delay: StdDuration,
    /// Upper bound on a single backoff delay.
    max_delay: StdDuration,
}

impl<P> RetryProvider<P>
where
    P: NewsProvider,
{
    /// Wrap `inner`. With `max_retries == 0` every call is a single attempt.
    pub fn new(inner: P, max_retries: usize, base_delay: StdDuration) -> Self {
        Self {
            inner,
            max_retries,
            base_delay,
            max_delay: StdDuration::from_secs(30),
        }
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &P {
        &self.inner
    }

    fn backoff(&self, attempt: usize) -> StdDuration {
        let shift = (attempt - 1).min(16) as u32;
        let mut delay = self.base_delay.saturating_mul(1 << shift);
        if delay > self.max_delay {
            delay = self.max_delay;
        }
        let jitter_ms: u64 = rng().random_range(0..=250);
        delay + StdDuration::from_millis(jitter_ms)
    }
}

impl<P> fmt::Debug for RetryProvider<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryProvider")
            .field("max_retries", &self.max_retries)
            .field("base_delay", &self.base_delay)
            .field("max_delay", &self.max_delay)
            .finish()
    }
}

impl<P> NewsProvider for RetryProvider<P>
where
    P: NewsProvider,
{
    #[instrument(level = "debug", skip_all, fields(term = %query.term))]
    async fn search(&self, query: &ProviderQuery<'_>) -> Result<Vec<RawArticle>, Box<dyn Error>> {
        let total_t0 = Instant::now();
        let mut attempt = 0usize;

        loop {
            match self.inner.search(query).await {
                Ok(articles) => return Ok(articles),
                Err(e) => {
                    attempt += 1;
                    let total_dt = total_t0.elapsed();

                    if attempt > self.max_retries {
                        if self.max_retries > 0 {
                            debug!(
                                attempt,
                                max = self.max_retries,
                                elapsed_ms_total = total_dt.as_millis(),
                                error = %e,
                                "search exhausted retries"
                            );
                        }
                        return Err(e);
                    }

                    let delay = self.backoff(attempt);
                    warn!(
                        attempt,
                        max = self.max_retries,
                        elapsed_ms_total = total_dt.as_millis(),
                        ?delay,
                        error = %e,
                        "search attempt failed; backing off"
                    );
                    sleep(delay).await;
                }
            }
        }
    }
}
