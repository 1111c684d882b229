/// Static configuration for one RSS/Atom source.
///
/// The registry is compiled into the binary; there is no config file or CLI
/// flag surface. Each descriptor carries the display styling the renderer
/// needs (icon, accent color) and a per-feed cap on pulled articles.
#[derive(Debug, Clone)]
pub struct FeedSpec {
    pub name: String,
    /// Stable identifier, unique across the registry. Used for filter
    /// matching in the rendered page, so it must be attribute-safe.
    pub slug: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    /// Cap on articles taken from this feed per run, in feed order.
    pub max_items: usize,
}

impl FeedSpec {
    pub fn new(
        name: &str,
        slug: &str,
        url: &str,
        icon: &str,
        color: &str,
        max_items: usize,
    ) -> Self {
        Self {
            name: name.to_string(),
            slug: slug.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            max_items,
        }
    }
}

/// The feeds this dashboard is built from, in display order.
pub fn default_feeds() -> Vec<FeedSpec> {
    vec![
        FeedSpec::new(
            "Import AI",
            "import-ai",
            "https://importai.substack.com/feed",
            "\u{1f916}",
            "#6366f1",
            5,
        ),
        FeedSpec::new(
            "Simon Willison",
            "simon-willison",
            "https://simonwillison.net/atom/everything/",
            "\u{1f4bb}",
            "#059669",
            10,
        ),
        FeedSpec::new(
            "Lenny's Newsletter",
            "lennys-newsletter",
            "https://www.lennysnewsletter.com/feed",
            "\u{1f4ca}",
            "#d97706",
            5,
        ),
        FeedSpec::new(
            "NN/g",
            "nng",
            "https://www.nngroup.com/feed/rss/",
            "\u{1f52c}",
            "#dc2626",
            5,
        ),
        FeedSpec::new(
            "Maggie Appleton",
            "maggie-appleton",
            "https://maggieappleton.com/rss.xml",
            "\u{1f33f}",
            "#16a34a",
            5,
        ),
    ]
}
