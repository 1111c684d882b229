use askama::Template;

use crate::article::Article;
use crate::registry::FeedSpec;

/// The whole dashboard as one self-contained document: embedded stylesheet,
/// filter buttons, article cards, and the inline filtering script. Askama's
/// HTML escaper handles all feed-supplied text, so feed content can never be
/// interpreted as markup.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub feeds: &'a [FeedSpec],
    pub articles: &'a [Article],
    pub updated_at: String,
}

pub fn render_page(
    feeds: &[FeedSpec],
    articles: &[Article],
    updated_at: String,
) -> askama::Result<String> {
    IndexTemplate {
        feeds,
        articles,
        updated_at,
    }
    .render()
}
