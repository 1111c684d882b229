use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::Local;
use tracing::info;

use crate::article::{sort_by_recency, Article};
use crate::fetcher::Fetcher;
use crate::registry::FeedSpec;
use crate::render;

/// Run the whole pipeline: fetch every feed in registry order, aggregate,
/// sort by recency, render, and write the page to `output_path`.
///
/// Individual feed failures are recovered inside the fetcher; an empty
/// aggregate is fatal and no file is written. Returns the article count.
pub async fn run(feeds: &[FeedSpec], output_path: &Path) -> anyhow::Result<usize> {
    let fetcher = Fetcher::new();

    println!("Fetching feeds...");
    let mut articles: Vec<Article> = Vec::new();
    for feed in feeds {
        println!("  Fetching {}...", feed.name);
        let fetched = fetcher.fetch_articles(feed).await;
        println!("    Got {} articles", fetched.len());
        articles.extend(fetched);
    }

    if articles.is_empty() {
        anyhow::bail!("No articles fetched from any source.");
    }

    sort_by_recency(&mut articles);

    let updated_at = Local::now().format("%Y-%m-%d %H:%M").to_string();
    let page = render::render_page(feeds, &articles, updated_at)?;

    fs::write(output_path, &page)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    info!("Wrote {} bytes to {}", page.len(), output_path.display());

    println!(
        "Generated {} with {} articles.",
        output_path.display(),
        articles.len()
    );
    Ok(articles.len())
}
