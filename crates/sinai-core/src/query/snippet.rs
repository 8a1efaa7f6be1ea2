//! Snippet extraction around the first match.

use super::highlight::{escape_html, highlight_with, query_pattern};
use crate::config::SearchConfig;
use regex::Regex;

/// Bounded excerpt of `text` around the first occurrence of `query`.
///
/// Without an occurrence the first `max_length` characters are returned.
/// With one at character offset `i`, the window spans from `i - 50` to
/// `i + query_len + 100`, clamped to the text, with `...` marking each cut
/// side. All offsets count characters, not bytes.
pub fn create_snippet(text: &str, query: &str, max_length: usize) -> String {
    match query_pattern(query) {
        Some(pattern) => snippet_with(&pattern, text, query.chars().count(), max_length),
        None => leading_excerpt(text, max_length),
    }
}

pub(crate) fn snippet_with(
    pattern: &Regex,
    text: &str,
    query_len: usize,
    max_length: usize,
) -> String {
    let Some(found) = pattern.find(text) else {
        return leading_excerpt(text, max_length);
    };

    let index = text[..found.start()].chars().count();
    let total = text.chars().count();
    let start = index.saturating_sub(SearchConfig::SNIPPET_CONTEXT_BEFORE);
    let end = (index + query_len + SearchConfig::SNIPPET_CONTEXT_AFTER).min(total);

    let window: String = text.chars().skip(start).take(end - start).collect();

    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str(SearchConfig::ELLIPSIS);
    }
    snippet.push_str(&highlight_with(pattern, &window));
    if end < total {
        snippet.push_str(SearchConfig::ELLIPSIS);
    }
    snippet
}

fn leading_excerpt(text: &str, max_length: usize) -> String {
    let truncated: String = text.chars().take(max_length).collect();
    let mut excerpt = escape_html(&truncated);
    if text.chars().count() > max_length {
        excerpt.push_str(SearchConfig::ELLIPSIS);
    }
    excerpt
}
