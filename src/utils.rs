//! Text cleaning, outlet matching, and file system helpers.
//!
//! - Title and publisher cleaning for safe display
//! - Publisher-suffix stripping and Kansas-outlet tagging
//! - String truncation for logs and listings
//! - Output directory validation

use crate::query::KANSAS_OUTLETS;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Anything that is not a letter, a number, `_`, whitespace, or safe punctuation.
///
/// Letters and numbers are matched by general category (`L*`, `Nd`/`Nl`/`No`),
/// so fractions and superscripts survive while combining marks and connector
/// punctuation other than `_` are stripped. `\x1C-\x1F` count as whitespace.
static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[^\p{L}\p{N}_\s\x1C-\x1F.,:;!?()'"-]+"#).expect("valid regex")
});

/// Strip characters that are unsafe to display and trim the result.
///
/// Keeps letters, digits, underscores, whitespace and `- . , : ; ! ? ( ) ' "`.
/// Cleaning an already clean string returns it unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_text("  <b>Moran</b> & co. "), "bMoranb  co.");
/// ```
pub fn clean_text(text: &str) -> String {
    UNSAFE_CHARS.replace_all(text, "").trim().to_string()
}

/// Remove a trailing `" - {publisher}"` from a headline.
///
/// Only that exact tail is removed. Other separators such as `|` or an
/// em-dash are left alone.
pub fn strip_publisher_suffix<'a>(title: &'a str, publisher: &str) -> &'a str {
    title
        .strip_suffix(publisher)
        .and_then(|rest| rest.strip_suffix(" - "))
        .unwrap_or(title)
}

/// Whether the raw publisher name contains any Kansas outlet name.
pub fn is_kansas_outlet(publisher: &str) -> bool {
    KANSAS_OUTLETS.iter().any(|outlet| publisher.contains(*outlet))
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` bytes (backing off to a char boundary) with
/// `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…(+{} bytes)", &s[..end], s.len() - end)
    }
}

/// First `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Create the export directory if needed and check that files can be written in it.
///
/// # Errors
///
/// The error names the directory or check file that failed.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| format!("cannot create output directory {path}: {e}"))?;

    let check = Path::new(path).join(".moran_news_write_check");
    fs::write(&check, b"")
        .await
        .map_err(|e| format!("output directory {path} is not writable ({}): {e}", check.display()))?;
    if let Err(e) = fs::remove_file(&check).await {
        debug!(error = %e, file = %check.display(), "Could not remove write check file");
    }

    info!("Output directory is writable");
    Ok(())
}
