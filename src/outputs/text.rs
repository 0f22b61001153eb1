//! Plain-text export: a header, a rule, then publisher/title and link pairs.

use super::REPORT_TITLE;
use crate::models::SearchReport;
use std::fmt::Write;

pub fn render(report: &SearchReport) -> String {
    let mut text = format!("{REPORT_TITLE}\n{}\n\n", "=".repeat(50));

    for article in &report.articles {
        write!(
            text,
            "{}{}: {}\n{}\n\n",
            article.regional_marker(),
            article.publisher,
            article.title,
            article.link
        )
        .unwrap();
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outputs::fixtures;

    #[test]
    fn test_render() {
        let text = render(&fixtures::report());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Jerry Moran News"));
        assert_eq!(lines.next(), Some("=".repeat(50).as_str()));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("*KWCH: Moran Talks Farm Bill"));
        assert_eq!(lines.next(), Some("https://x/a2"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("CNN: Moran backs farm aid"));
        assert_eq!(lines.next(), Some("https://x/a1"));
    }

    #[test]
    fn test_render_empty() {
        let mut report = fixtures::report();
        report.articles.clear();
        assert_eq!(render(&report), format!("Jerry Moran News\n{}\n\n", "=".repeat(50)));
    }
}
