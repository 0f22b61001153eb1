//! # Moran News
//!
//! Searches Google News for Senator Jerry Moran under every common spelling
//! of his name, merges and deduplicates the results, drops unwanted sources,
//! marks Kansas outlets, and prints or exports what is left.
//!
//! ## Usage
//!
//! ```sh
//! moran_news -d 7 -o ./exports
//! ```
//!
//! ## Architecture
//!
//! 1. **Query**: one Google News RSS search per name variant, in order
//! 2. **Merge**: first occurrence of each link wins
//! 3. **Filter**: `.gov` and Quiver Quantitative sources (both on by default)
//! 4. **Clean & dedupe**: strip the publisher suffix and unsafe characters,
//!    first occurrence of each cleaned title wins
//! 5. **Output**: console listing, plus Markdown/text/JSON exports when an
//!    output directory is given

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod models;
mod observer;
mod outputs;
mod pipeline;
mod providers;
mod query;
mod settings;
mod utils;

use cli::Cli;
use models::SearchReport;
use observer::{NoopObserver, SearchObserver, TracingObserver};
use outputs::{console, write_exports};
use providers::google_news::GoogleNewsProvider;
use providers::retry::RetryProvider;
use settings::ProviderSettings;
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("moran_news starting up");

    let args = Cli::parse();
    debug!(
        days = args.days,
        exclude_gov = args.exclude_gov(),
        exclude_quiver = args.exclude_quiver(),
        output_dir = ?args.output_dir,
        "Parsed CLI arguments"
    );

    // Early check: the output dir must be usable before we spend time searching
    if let Some(ref output_dir) = args.output_dir {
        if let Err(e) = ensure_writable_dir(output_dir).await {
            error!(
                path = %output_dir,
                error = %e,
                "Output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    let mut settings = ProviderSettings::load(args.config.as_deref()).await?;
    if let Some(retries) = args.retries {
        settings.retries = retries;
    }
    let provider = RetryProvider::new(
        GoogleNewsProvider::new(&settings)?,
        settings.retries,
        settings.retry_base_delay(),
    );
    info!(
        base_url = %settings.base_url,
        timeout_secs = settings.timeout_secs,
        retries = settings.retries,
        "Provider ready"
    );

    let observer: &dyn SearchObserver = if args.quiet {
        &NoopObserver
    } else {
        &TracingObserver
    };
    let outcome = pipeline::run(
        &provider,
        args.days,
        args.exclude_gov(),
        args.exclude_quiver(),
        observer,
    )
    .await?;

    if outcome.is_empty() {
        warn!(total = outcome.total_found, "No articles found");
    } else {
        info!(
            unique = outcome.articles.len(),
            total = outcome.total_found,
            regional = outcome.regional_count(),
            "Articles found"
        );
    }

    let now = Local::now();
    let report = SearchReport {
        local_date: now.format("%Y-%m-%d").to_string(),
        local_time: now.format("%H:%M:%S").to_string(),
        days: args.days,
        total_found: outcome.total_found,
        articles: outcome.articles,
    };

    print!("{}", console::render(&report));

    // ---- Exports ----
    if let Some(ref output_dir) = args.output_dir {
        if report.articles.is_empty() {
            info!("Nothing to export");
        } else {
            let paths = write_exports(&report, output_dir).await?;
            for path in &paths {
                println!("Saved {}", path.display());
            }
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
