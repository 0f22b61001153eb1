//! JSON export of a [`SearchReport`].
//!
//! The report carries the search date and time, the lookback window, the raw
//! result count and every article including its `published` timestamp, so it
//! is the one export that round-trips the full outcome.

use crate::models::SearchReport;

/// Serialize a report as pretty-printed JSON.
pub fn render(report: &SearchReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
