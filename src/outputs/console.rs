//! The listing printed after a search.

use crate::models::SearchReport;
use crate::utils::truncate_chars;
use std::fmt::Write;

/// Characters of the title shown in a listing heading.
const HEADING_TITLE_CHARS: usize = 80;

pub const NO_RESULTS: &str = "No articles found. Try adjusting your search parameters.";

pub fn render(report: &SearchReport) -> String {
    if report.articles.is_empty() {
        return format!("{NO_RESULTS}\n");
    }

    let mut out = String::new();
    writeln!(
        out,
        "Found {} unique articles (from {} total results)",
        report.articles.len(),
        report.total_found
    )
    .unwrap();

    let regional = report.articles.iter().filter(|a| a.is_regional).count();
    if regional > 0 {
        writeln!(out, "{regional} articles from Kansas outlets").unwrap();
    }
    writeln!(out, "{}", "-".repeat(50)).unwrap();

    for (i, article) in report.articles.iter().enumerate() {
        let marker = article.regional_marker();
        writeln!(
            out,
            "{}. {}{}: {}...",
            i + 1,
            marker,
            article.publisher,
            truncate_chars(&article.title, HEADING_TITLE_CHARS)
        )
        .unwrap();
        writeln!(out, "   Media Source: {}{}", marker, article.publisher).unwrap();
        writeln!(out, "   Title: {}", article.title).unwrap();
        writeln!(out, "   Published: {}", article.published).unwrap();
        writeln!(out, "   Link: {}", article.link).unwrap();
    }

    out
}
