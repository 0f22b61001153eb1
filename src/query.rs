//! Query configuration for a search run.
//!
//! Everything here is fixed except the lookback window and the two filter
//! switches. A [`QuerySpec`] is built once per run and never mutated.

use crate::error::SearchError;
use std::fmt;
use std::str::FromStr;

/// Name variants queried against the provider, in merge order.
pub const SEARCH_TERMS: [&str; 7] = [
    "Jerry Moran",
    "Senator Jerry Moran",
    "Senator Moran",
    "Sen. Moran",
    "Sen. Jerry Moran",
    "Sens. Moran",
    "Sens. Jerry Moran",
];

/// Kansas outlets. A publisher containing any of these is tagged regional.
pub const KANSAS_OUTLETS: [&str; 17] = [
    "Kansas Reflector",
    "The Topeka Capital-Journal",
    "The Wichita Eagle",
    "KCLY Radio",
    "KSN-TV",
    "KWCH",
    "Kansas City Star",
    "Lawrence Journal-World",
    "The Garden City Telegram",
    "KSNT 27 News",
    "The Hutchinson News",
    "Salina Journal",
    "Hays Daily News",
    "Hays Post",
    "Emporia Gazette",
    "JC Post",
    "WIBW",
];

/// Publisher substring dropped when government sources are excluded.
pub const GOV_MARKER: &str = ".gov";

/// Publisher substring dropped when the named source is excluded.
pub const EXCLUDED_SOURCE: &str = "Quiver Quantitative";

pub const MAX_RESULTS: usize = 100;
pub const COUNTRY: &str = "US";
pub const LANGUAGE: &str = "en";

/// How far back the provider should look.
///
/// Only the five windows the tool offers can be constructed; anything else is
/// rejected with [`SearchError::InvalidConfiguration`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookbackWindow {
    OneDay,
    #[default]
    ThreeDays,
    OneWeek,
    TwoWeeks,
    ThirtyDays,
}

impl LookbackWindow {
    pub const SUPPORTED_DAYS: [u32; 5] = [1, 3, 7, 14, 30];

    pub fn days(self) -> u32 {
        match self {
            LookbackWindow::OneDay => 1,
            LookbackWindow::ThreeDays => 3,
            LookbackWindow::OneWeek => 7,
            LookbackWindow::TwoWeeks => 14,
            LookbackWindow::ThirtyDays => 30,
        }
    }

    /// Provider period token, e.g. `"7d"`.
    pub fn period(self) -> String {
        format!("{}d", self.days())
    }
}

impl TryFrom<u32> for LookbackWindow {
    type Error = SearchError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            1 => Ok(LookbackWindow::OneDay),
            3 => Ok(LookbackWindow::ThreeDays),
            7 => Ok(LookbackWindow::OneWeek),
            14 => Ok(LookbackWindow::TwoWeeks),
            30 => Ok(LookbackWindow::ThirtyDays),
            other => Err(SearchError::InvalidConfiguration(format!(
                "unsupported lookback of {other} days (expected one of {:?})",
                Self::SUPPORTED_DAYS
            ))),
        }
    }
}

impl From<LookbackWindow> for u32 {
    fn from(window: LookbackWindow) -> Self {
        window.days()
    }
}

impl FromStr for LookbackWindow {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days: u32 = s.trim().parse().map_err(|_| {
            SearchError::InvalidConfiguration(format!("'{s}' is not a number of days"))
        })?;
        LookbackWindow::try_from(days)
    }
}

impl fmt::Display for LookbackWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

/// Immutable configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct QuerySpec {
    pub window: LookbackWindow,
    pub terms: Vec<String>,
    pub max_results: usize,
    pub country: String,
    pub language: String,
    pub exclude_gov: bool,
    pub exclude_named_source: bool,
}

impl QuerySpec {
    /// Build the spec for a run with the fixed variants, cap, country and language.
    pub fn new(window: LookbackWindow, exclude_gov: bool, exclude_named_source: bool) -> Self {
        Self {
            window,
            terms: SEARCH_TERMS.iter().map(|t| t.to_string()).collect(),
            max_results: MAX_RESULTS,
            country: COUNTRY.to_string(),
            language: LANGUAGE.to_string(),
            exclude_gov,
            exclude_named_source,
        }
    }

    /// Validate `days` and build the spec, failing before anything is queried.
    pub fn from_days(
        days: u32,
        exclude_gov: bool,
        exclude_named_source: bool,
    ) -> Result<Self, SearchError> {
        let window = LookbackWindow::try_from(days)?;
        Ok(Self::new(window, exclude_gov, exclude_named_source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_windows() {
        for days in LookbackWindow::SUPPORTED_DAYS {
            let window = LookbackWindow::try_from(days).unwrap();
            assert_eq!(window.days(), days);
        }
    }

    #[test]
    fn test_unsupported_window_rejected() {
        for days in [0, 2, 5, 31, 365] {
            assert!(matches!(
                LookbackWindow::try_from(days),
                Err(SearchError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_window_from_str() {
        assert_eq!("14".parse::<LookbackWindow>().unwrap(), LookbackWindow::TwoWeeks);
        assert!("two".parse::<LookbackWindow>().is_err());
        assert!("10".parse::<LookbackWindow>().is_err());
    }

    #[test]
    fn test_period_token() {
        assert_eq!(LookbackWindow::OneWeek.period(), "7d");
        assert_eq!(LookbackWindow::default().period(), "3d");
    }

    #[test]
    fn test_query_spec_defaults() {
        let spec = QuerySpec::from_days(7, true, false).unwrap();
        assert_eq!(spec.terms.len(), 7);
        assert_eq!(spec.terms[0], "Jerry Moran");
        assert_eq!(spec.terms[6], "Sens. Jerry Moran");
        assert_eq!(spec.max_results, 100);
        assert_eq!(spec.country, "US");
        assert_eq!(spec.language, "en");
        assert!(spec.exclude_gov);
        assert!(!spec.exclude_named_source);
    }

    #[test]
    fn test_query_spec_rejects_bad_days() {
        assert!(QuerySpec::from_days(4, true, true).is_err());
    }
}
