//! Markdown export.
//!
//! ```text
//! # Jerry Moran News
//!
//! *Search conducted on 2025-05-06 14:05:09*
//! *Time range: Last 3 days*
//!
//! - *KWCH: [Moran Talks Farm Bill](https://...)
//! - CNN: [Moran backs farm aid](https://...)
//! ```

use super::REPORT_TITLE;
use crate::models::SearchReport;
use std::fmt::Write;

pub fn render(report: &SearchReport) -> String {
    let mut md = String::new();

    writeln!(md, "# {REPORT_TITLE}\n").unwrap();
    writeln!(md, "*Search conducted on {} {}*", report.local_date, report.local_time).unwrap();
    writeln!(md, "*Time range: Last {} days*\n", report.days).unwrap();

    for article in &report.articles {
        writeln!(
            md,
            "- {}{}: [{}]({})",
            article.regional_marker(),
            article.publisher,
            article.title,
            article.link
        )
        .unwrap();
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outputs::fixtures;

    #[test]
    fn test_render() {
        let md = render(&fixtures::report());
        let expected = "# Jerry Moran News\n\n\
                        *Search conducted on 2025-05-06 14:05:09*\n\
                        *Time range: Last 3 days*\n\n\
                        - *KWCH: [Moran Talks Farm Bill](https://x/a2)\n\
                        - CNN: [Moran backs farm aid](https://x/a1)\n";
        assert_eq!(md, expected);
    }
}
