//! Google News RSS search provider.
//!
//! Queries `https://news.google.com/rss/search` and reads the RSS 2.0 feed it
//! returns. The lookback window is expressed inside the query itself as a
//! `when:Nd` operator; country and language go in the `hl`, `gl` and `ceid`
//! parameters.
//!
//! # Feed Shape
//!
//! ```text
//! <rss><channel>
//!   <item>
//!     <title>Moran Talks Farm Bill - KWCH</title>
//!     <link>https://news.google.com/rss/articles/...</link>
//!     <pubDate>Mon, 06 May 2025 14:00:00 GMT</pubDate>
//!     <source url="https://www.kwch.com">KWCH</source>
//!   </item>
//! </channel></rss>
//! ```

use super::{NewsProvider, ProviderQuery};
use crate::models::RawArticle;
use crate::settings::ProviderSettings;
use crate::utils::truncate_for_log;
use quick_xml::de::DeError;
use reqwest::Client;
use serde::Deserialize;
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: String,
    link: String,
    #[serde(rename = "pubDate", default)]
    pub_date: String,
    #[serde(default)]
    source: Option<Source>,
}

#[derive(Debug, Deserialize)]
struct Source {
    #[serde(rename = "$text", default)]
    name: String,
}

impl From<Item> for RawArticle {
    fn from(item: Item) -> Self {
        RawArticle {
            title: item.title,
            link: item.link,
            publisher: item.source.map(|s| s.name).unwrap_or_default(),
            published: item.pub_date,
        }
    }
}

/// Parse a Google News RSS document, keeping at most `max_results` items.
///
/// An item without a `<title>` or `<link>` makes the whole feed malformed.
pub fn parse_feed(xml: &str, max_results: usize) -> Result<Vec<RawArticle>, DeError> {
    let rss: Rss = quick_xml::de::from_str(xml)?;
    Ok(rss
        .channel
        .items
        .into_iter()
        .take(max_results)
        .map(RawArticle::from)
        .collect())
}

/// Client for the Google News RSS search endpoint.
#[derive(Debug, Clone)]
pub struct GoogleNewsProvider {
    client: Client,
    base_url: Url,
}

impl GoogleNewsProvider {
    /// Build a provider with the timeout and user agent from `settings`.
    ///
    /// # Errors
    ///
    /// Fails if `settings.base_url` is not a valid URL or the HTTP client
    /// cannot be constructed.
    pub fn new(settings: &ProviderSettings) -> Result<Self, Box<dyn Error>> {
        let base_url = Url::parse(&settings.base_url)?;
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.as_str())
            .build()?;
        Ok(Self { client, base_url })
    }

    /// The full search URL for `query`.
    pub fn search_url(&self, query: &ProviderQuery<'_>) -> Url {
        let q = format!("{} when:{}", query.term, query.window.period());
        let mut url = self.base_url.clone();
        url.set_query(Some(&format!(
            "q={}&hl={lang}&gl={country}&ceid={country}:{lang}",
            urlencoding::encode(&q),
            lang = query.language,
            country = query.country,
        )));
        url
    }
}

impl NewsProvider for GoogleNewsProvider {
    #[instrument(level = "info", skip_all, fields(term = %query.term))]
    async fn search(&self, query: &ProviderQuery<'_>) -> Result<Vec<RawArticle>, Box<dyn Error>> {
        let url = self.search_url(query);
        debug!(%url, "Fetching Google News RSS");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Google News returned an error status");
            return Err(format!("Google News returned status {status}").into());
        }

        let body = response.text().await?;
        let articles = parse_feed(&body, query.max_results).map_err(|e| {
            warn!(
                error = %e,
                body_preview = %truncate_for_log(&body, 300),
                "Google News feed did not parse"
            );
            e
        })?;

        info!(count = articles.len(), "Fetched Google News results");
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QuerySpec;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <generator>NFE/5.0</generator>
    <title>"Jerry Moran" - Google News</title>
    <link>https://news.google.com/search?q=Jerry+Moran</link>
    <language>en-US</language>
    <item>
      <title>Moran Talks Farm Bill &amp; Crop Insurance - KWCH</title>
      <link>https://news.google.com/rss/articles/abc</link>
      <guid isPermaLink="false">abc</guid>
      <pubDate>Mon, 06 May 2025 14:00:00 GMT</pubDate>
      <description>&lt;a href="https://www.kwch.com/x"&gt;Moran&lt;/a&gt;</description>
      <source url="https://www.kwch.com">KWCH</source>
    </item>
    <item>
      <title>Senate passes defense bill - Reuters</title>
      <link>https://news.google.com/rss/articles/def</link>
      <guid isPermaLink="false">def</guid>
      <pubDate>Sun, 05 May 2025 09:30:00 GMT</pubDate>
      <source url="https://www.reuters.com">Reuters</source>
    </item>
    <item>
      <title>No source on this one</title>
      <link>https://news.google.com/rss/articles/ghi</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_feed() {
        let articles = parse_feed(FEED, 100).unwrap();
        assert_eq!(articles.len(), 3);

        assert_eq!(articles[0].title, "Moran Talks Farm Bill & Crop Insurance - KWCH");
        assert_eq!(articles[0].link, "https://news.google.com/rss/articles/abc");
        assert_eq!(articles[0].publisher, "KWCH");
        assert_eq!(articles[0].published, "Mon, 06 May 2025 14:00:00 GMT");

        assert_eq!(articles[1].publisher, "Reuters");

        assert_eq!(articles[2].publisher, "");
        assert_eq!(articles[2].published, "");
    }

    #[test]
    fn test_parse_feed_respects_cap() {
        let articles = parse_feed(FEED, 2).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[1].publisher, "Reuters");
    }

    #[test]
    fn test_parse_feed_without_items() {
        let xml = r#"<rss version="2.0"><channel><title>empty</title></channel></rss>"#;
        assert!(parse_feed(xml, 100).unwrap().is_empty());
    }

    #[test]
    fn test_parse_feed_rejects_item_without_link() {
        let xml = r#"<rss><channel><item><title>Orphan</title></item></channel></rss>"#;
        assert!(parse_feed(xml, 100).is_err());
    }

    #[test]
    fn test_parse_feed_rejects_garbage() {
        assert!(parse_feed("<html><body>Rate limited</body>", 100).is_err());
    }

    #[test]
    fn test_search_url() {
        let provider = GoogleNewsProvider::new(&ProviderSettings::default()).unwrap();
        let spec = QuerySpec::from_days(7, true, true).unwrap();
        let query = ProviderQuery::for_term(&spec, "Sen. Jerry Moran");

        let url = provider.search_url(&query);
        assert_eq!(
            url.as_str(),
            "https://news.google.com/rss/search?q=Sen.%20Jerry%20Moran%20when%3A7d&hl=en&gl=US&ceid=US:en"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let settings = ProviderSettings {
            base_url: "not a url".to_string(),
            ..ProviderSettings::default()
        };
        assert!(GoogleNewsProvider::new(&settings).is_err());
    }
}
