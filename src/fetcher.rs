use std::time::Duration;

use feed_rs::parser;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::article::Article;
use crate::registry::FeedSpec;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "MyNews/1.0 (+https://github.com)";

/// Why a single feed produced no articles this run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed not parseable: {0}")]
    Parse(#[from] feed_rs::parser::ParseFeedError),
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch and normalize one feed. Any failure is recovered here: the feed
    /// contributes zero articles for this run, a warning goes to the
    /// diagnostic stream, and no retry is attempted.
    pub async fn fetch_articles(&self, feed: &FeedSpec) -> Vec<Article> {
        match self.try_fetch(feed).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!("Failed to fetch {}: {}", feed.name, e);
                Vec::new()
            }
        }
    }

    /// One GET, parse as RSS or Atom, keep the first `max_items` entries in
    /// the feed's own order. The global recency sort happens later.
    async fn try_fetch(&self, feed: &FeedSpec) -> Result<Vec<Article>, FetchError> {
        debug!("Fetching feed: {} ({})", feed.name, feed.url);

        let response = self.client.get(&feed.url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        let parsed = parser::parse(&bytes[..])?;

        Ok(parsed
            .entries
            .into_iter()
            .take(feed.max_items)
            .map(|entry| Article::from_entry(entry, feed))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_feed(url: &str, max_items: usize) -> FeedSpec {
        FeedSpec::new(
            "Test Feed",
            "test-feed",
            url,
            "\u{1f4f0}",
            "#123456",
            max_items,
        )
    }

    const RSS_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Tech News</title>
    <link>https://technews.example.com</link>
    <description>Latest tech news</description>
    <item>
      <title>First Article</title>
      <link>https://technews.example.com/1</link>
      <description>Summary one.</description>
      <pubDate>Mon, 09 Dec 2024 12:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Second Article</title>
      <link>https://technews.example.com/2</link>
      <description>Summary two.</description>
      <pubDate>Sun, 08 Dec 2024 12:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Third Article</title>
      <link>https://technews.example.com/3</link>
      <description>Summary three.</description>
      <pubDate>Sat, 07 Dec 2024 12:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

    const ATOM_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Blog</title>
  <id>urn:uuid:feed</id>
  <updated>2024-12-09T12:00:00Z</updated>
  <entry>
    <title>Atom Entry</title>
    <id>urn:uuid:entry-1</id>
    <link href="https://atomblog.example.com/1"/>
    <updated>2024-12-09T12:00:00Z</updated>
    <summary>An atom summary.</summary>
  </entry>
</feed>"#;

    async fn serve(body: &str, content_type: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, content_type))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_fetch_rss_feed() {
        let server = serve(RSS_BODY, "application/rss+xml").await;
        let feed = test_feed(&format!("{}/feed.xml", server.uri()), 10);

        let articles = Fetcher::new().fetch_articles(&feed).await;

        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].title, "First Article");
        assert_eq!(articles[0].link, "https://technews.example.com/1");
        assert_eq!(articles[0].date, "2024-12-09");
        assert_eq!(articles[0].summary, "Summary one.");
        assert_eq!(articles[0].source_slug, "test-feed");
    }

    #[tokio::test]
    async fn test_fetch_atom_feed() {
        let server = serve(ATOM_BODY, "application/atom+xml").await;
        let feed = test_feed(&format!("{}/feed.xml", server.uri()), 10);

        let articles = Fetcher::new().fetch_articles(&feed).await;

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Atom Entry");
        assert_eq!(articles[0].date, "2024-12-09");
        assert_eq!(articles[0].summary, "An atom summary.");
    }

    #[tokio::test]
    async fn test_max_items_caps_in_feed_order() {
        let server = serve(RSS_BODY, "application/rss+xml").await;
        let feed = test_feed(&format!("{}/feed.xml", server.uri()), 2);

        let articles = Fetcher::new().fetch_articles(&feed).await;

        // The cap takes the first entries as the feed lists them
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "First Article");
        assert_eq!(articles[1].title, "Second Article");
    }

    #[tokio::test]
    async fn test_http_error_yields_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed.xml"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let feed = test_feed(&format!("{}/feed.xml", server.uri()), 10);
        let articles = Fetcher::new().fetch_articles(&feed).await;

        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_yields_empty() {
        // Nothing listens here; the connection is refused immediately
        let feed = test_feed("http://127.0.0.1:1/feed.xml", 10);
        let articles = Fetcher::new().fetch_articles(&feed).await;

        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_yields_empty() {
        let server = serve("this is not xml at all", "text/html").await;
        let feed = test_feed(&format!("{}/feed.xml", server.uri()), 10);

        let articles = Fetcher::new().fetch_articles(&feed).await;

        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_sends_identifying_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed.xml"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_raw(RSS_BODY, "application/rss+xml"))
            .mount(&server)
            .await;

        let feed = test_feed(&format!("{}/feed.xml", server.uri()), 10);
        let articles = Fetcher::new().fetch_articles(&feed).await;

        // The mock only matches when the user-agent header is present
        assert_eq!(articles.len(), 3);
    }
}
