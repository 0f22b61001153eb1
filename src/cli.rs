//! Command-line interface definitions for Moran News.
//!
//! Options can be given as flags; the lookback window and output directory
//! also fall back to environment variables.

use crate::error::SearchError;
use crate::query::LookbackWindow;
use clap::Parser;

/// Command-line arguments for the Moran News search.
///
/// # Examples
///
/// ```sh
/// # Last 3 days, .gov and Quiver Quantitative excluded, print only
/// moran_news
///
/// # Last week, keep .gov sources, write exports
/// moran_news -d 7 --include-gov -o ./exports
///
/// # Custom provider settings
/// moran_news -c ./settings.yaml --retries 0
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// How many days back to search: 1, 3, 7, 14 or 30
    #[arg(short, long, env = "MORAN_NEWS_DAYS", default_value = "3", value_parser = parse_days)]
    pub days: u32,

    /// Keep sources whose name contains ".gov"
    #[arg(long)]
    pub include_gov: bool,

    /// Keep articles from Quiver Quantitative
    #[arg(long)]
    pub include_quiver: bool,

    /// Directory for the Markdown, text and JSON exports
    #[arg(short, long, env = "MORAN_NEWS_OUTPUT_DIR")]
    pub output_dir: Option<String>,

    /// Optional path to a provider settings YAML file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Retries per search variant (overrides the settings file)
    #[arg(long)]
    pub retries: Option<usize>,

    /// Don't log per-variant progress
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn exclude_gov(&self) -> bool {
        !self.include_gov
    }

    pub fn exclude_quiver(&self) -> bool {
        !self.include_quiver
    }
}

fn parse_days(s: &str) -> Result<u32, SearchError> {
    s.parse::<LookbackWindow>().map(u32::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["moran_news"]);

        assert_eq!(cli.days, 3);
        assert!(cli.exclude_gov());
        assert!(cli.exclude_quiver());
        assert_eq!(cli.output_dir, None);
        assert_eq!(cli.retries, None);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "moran_news",
            "--days",
            "14",
            "--include-gov",
            "--output-dir",
            "./exports",
            "--retries",
            "0",
        ]);

        assert_eq!(cli.days, 14);
        assert!(!cli.exclude_gov());
        assert!(cli.exclude_quiver());
        assert_eq!(cli.output_dir.as_deref(), Some("./exports"));
        assert_eq!(cli.retries, Some(0));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["moran_news", "-d", "30", "-o", "/tmp/out", "-c", "settings.yaml"]);

        assert_eq!(cli.days, 30);
        assert_eq!(cli.output_dir.as_deref(), Some("/tmp/out"));
        assert_eq!(cli.config.as_deref(), Some("settings.yaml"));
    }

    #[test]
    fn test_cli_rejects_unsupported_days() {
        assert!(Cli::try_parse_from(["moran_news", "--days", "5"]).is_err());
        assert!(Cli::try_parse_from(["moran_news", "--days", "week"]).is_err());
    }
}
