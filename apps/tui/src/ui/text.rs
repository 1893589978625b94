use regex::Regex;
use std::sync::OnceLock;

static BREAKS: OnceLock<Option<Regex>> = OnceLock::new();
static TAGS: OnceLock<Option<Regex>> = OnceLock::new();

fn breaks() -> Option<&'static Regex> {
    BREAKS
        .get_or_init(|| Regex::new(r"(?i)<br\s*/?>|</(p|div|li|h[1-6])\s*>").ok())
        .as_ref()
}

fn tags() -> Option<&'static Regex> {
    TAGS.get_or_init(|| Regex::new(r"<[^>]*>").ok()).as_ref()
}

/// Flattens pane markup into terminal text: block ends become line breaks,
/// remaining tags are dropped and entities decoded.
pub fn markup_to_text(markup: &str) -> String {
    let (Some(breaks), Some(tags)) = (breaks(), tags()) else {
        return markup.to_string();
    };

    let with_breaks = breaks.replace_all(markup, "\n");
    let stripped = tags.replace_all(&with_breaks, "");
    let decoded = htmlize::unescape(stripped.as_ref());

    decoded
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
