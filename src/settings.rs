//! Provider settings, optionally loaded from a YAML file.
//!
//! Every field has a default, so an empty file (or no file at all) gives a
//! working Google News configuration.
//!
//! ```yaml
//! base_url: https://news.google.com/rss/search
//! timeout_secs: 10
//! retries: 2
//! ```

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::fs;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Google News RSS search endpoint.
    pub base_url: String,
    /// Per-request HTTP timeout.
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Extra attempts per query variant after the first failure.
    pub retries: usize,
    /// First backoff delay; doubles on every retry.
    pub retry_base_delay_ms: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://news.google.com/rss/search".to_string(),
            timeout_secs: 10,
            user_agent: format!("moran_news/{}", env!("CARGO_PKG_VERSION")),
            retries: 2,
            retry_base_delay_ms: 1000,
        }
    }
}

impl ProviderSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }

    /// Parse settings from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load settings from `path`, or the defaults when no path is given.
    #[instrument(level = "info")]
    pub async fn load(path: Option<&str>) -> Result<Self, SearchError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).await.map_err(|e| SearchError::Settings {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let settings = Self::from_yaml(&text).map_err(|e| SearchError::Settings {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        info!(path, base_url = %settings.base_url, "Loaded provider settings");
        Ok(settings)
    }
}
