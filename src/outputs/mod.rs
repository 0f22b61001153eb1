//! Rendering and export of search results.
//!
//! # Submodules
//!
//! - [`console`]: the listing printed to stdout after a search
//! - [`markdown`]: Markdown export
//! - [`text`]: plain-text export
//! - [`json`]: JSON export of the full [`SearchReport`](crate::models::SearchReport)
//!
//! Every export writes one line per article in returned order, with `*`
//! before the publisher of Kansas outlets.
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── jerry_moran_news_20250506.md
//! ├── jerry_moran_news_20250506.txt
//! └── jerry_moran_news_20250506.json
//! ```

pub mod console;
pub mod json;
pub mod markdown;
pub mod text;

use crate::models::SearchReport;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Title used by the Markdown and text exports.
pub const REPORT_TITLE: &str = "Jerry Moran News";

/// File name stem for exports, e.g. `jerry_moran_news_20250506`.
pub fn file_stem(report: &SearchReport) -> String {
    format!("jerry_moran_news_{}", report.local_date.replace('-', ""))
}

/// Write the Markdown, text and JSON exports into `output_dir`.
///
/// Returns the paths written. Stops at the first failed write.
#[instrument(level = "info", skip_all, fields(%output_dir, articles = report.articles.len()))]
pub async fn write_exports(
    report: &SearchReport,
    output_dir: &str,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let stem = file_stem(report);
    let dir = Path::new(output_dir);

    let exports = [
        (dir.join(format!("{stem}.md")), markdown::render(report)),
        (dir.join(format!("{stem}.txt")), text::render(report)),
        (dir.join(format!("{stem}.json")), json::render(report)?),
    ];

    let mut written = Vec::with_capacity(exports.len());
    for (path, contents) in exports {
        if let Err(e) = fs::write(&path, contents).await {
            error!(path = %path.display(), error = %e, "Failed writing export");
            return Err(e.into());
        }
        info!(path = %path.display(), "Wrote export");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{FilteredArticle, SearchReport};

    pub fn report() -> SearchReport {
        SearchReport {
            local_date: "2025-05-06".to_string(),
            local_time: "14:05:09".to_string(),
            days: 3,
            total_found: 4,
            articles: vec![
                FilteredArticle {
                    title: "Moran Talks Farm Bill".to_string(),
                    publisher: "KWCH".to_string(),
                    link: "https://x/a2".to_string(),
                    is_regional: true,
                    published: "Mon, 06 May 2025 14:00:00 GMT".to_string(),
                },
                FilteredArticle {
                    title: "Moran backs farm aid".to_string(),
                    publisher: "CNN".to_string(),
                    link: "https://x/a1".to_string(),
                    is_regional: false,
                    published: "Sun, 05 May 2025 09:30:00 GMT".to_string(),
                },
            ],
        }
    }
}
