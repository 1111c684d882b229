use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum summary length, in characters, before truncation kicks in.
pub const SUMMARY_MAX_CHARS: usize = 200;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Reduce feed-supplied HTML to plain text: drop tags, decode entities,
/// collapse whitespace runs to single spaces, and trim.
///
/// Tags are stripped before entities are decoded, so markup that arrives
/// entity-encoded (`&lt;b&gt;`) survives as literal text rather than being
/// stripped a second time. The renderer escapes it again on output.
pub fn strip_html(text: &str) -> String {
    let stripped = TAG_RE.replace_all(text, "");
    let decoded = html_escape::decode_html_entities(stripped.as_ref());
    WHITESPACE_RE.replace_all(decoded.as_ref(), " ").trim().to_string()
}

/// Truncate `text` to at most `max_chars` characters without splitting a
/// word: back off to the last space before the cut and append an ellipsis.
/// Text that already fits is returned unchanged, with no ellipsis. A single
/// token longer than the limit gets a hard character cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    match cut.rfind(' ') {
        Some(boundary) => format!("{}...", &cut[..boundary]),
        None => format!("{}...", cut),
    }
}
