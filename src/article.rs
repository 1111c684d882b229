use chrono::{DateTime, Utc};
use feed_rs::model::Entry;

use crate::registry::FeedSpec;
use crate::text::{strip_html, truncate, SUMMARY_MAX_CHARS};

/// Placeholder title for entries that arrive without one. Feed data is
/// untrusted and incomplete, so missing fields degrade rather than fail.
const UNTITLED: &str = "Untitled";
const MISSING_LINK: &str = "#";

/// One normalized feed entry, ready to render.
///
/// Carries copies of its source descriptor's display fields so the renderer
/// never needs to look back at the registry. Never persisted; lives only for
/// the duration of one run.
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub link: String,
    /// Calendar-day display string, empty when the entry had no date.
    pub date: String,
    /// Unix timestamp used only for ordering; zero means undated, which
    /// sorts after every dated article.
    pub sort_key: i64,
    pub summary: String,
    pub source_name: String,
    pub source_slug: String,
    pub source_icon: String,
    pub source_color: String,
}

impl Article {
    /// Normalize one feed entry against its source descriptor.
    ///
    /// Dates prefer the published timestamp and fall back to updated.
    /// Summaries are stripped of markup and truncated at a word boundary.
    pub fn from_entry(entry: Entry, feed: &FeedSpec) -> Self {
        let title = entry
            .title
            .map(|t| t.content)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string());

        let link = entry
            .links
            .first()
            .map(|l| l.href.clone())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| MISSING_LINK.to_string());

        let published: Option<DateTime<Utc>> = entry.published.or(entry.updated);
        let (date, sort_key) = match published {
            Some(dt) => (dt.format("%Y-%m-%d").to_string(), dt.timestamp()),
            None => (String::new(), 0),
        };

        let summary_raw = entry.summary.map(|s| s.content).unwrap_or_default();
        let summary = truncate(&strip_html(&summary_raw), SUMMARY_MAX_CHARS);

        Self {
            title,
            link,
            date,
            sort_key,
            summary,
            source_name: feed.name.clone(),
            source_slug: feed.slug.clone(),
            source_icon: feed.icon.clone(),
            source_color: feed.color.clone(),
        }
    }
}

/// Order articles most-recent-first. The sort is stable, so articles with
/// equal keys (including all undated, zero-key articles) keep the order in
/// which their feeds were aggregated.
pub fn sort_by_recency(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.sort_key.cmp(&a.sort_key));
}
