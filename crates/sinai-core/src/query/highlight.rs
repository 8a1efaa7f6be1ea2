//! HTML escaping and match highlighting.

use regex::{Regex, RegexBuilder};

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Escape text for safe inclusion in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Case-insensitive pattern matching the literal query text.
///
/// The query is regex-escaped first, so `c++` or `(a` match themselves.
/// Returns `None` for an empty query.
pub fn query_pattern(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Escape `text` and wrap every occurrence of `query` in a `<mark>` element.
pub fn highlight_query(text: &str, query: &str) -> String {
    match query_pattern(query) {
        Some(pattern) => highlight_with(&pattern, text),
        None => escape_html(text),
    }
}

/// Matches are located on the raw text and each segment is escaped on its
/// own, so markers are never escaped and an entity like `&amp;` is never
/// split by a marker.
pub(crate) fn highlight_with(pattern: &Regex, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + MARK_OPEN.len() + MARK_CLOSE.len());
    let mut last = 0;

    for m in pattern.find_iter(text) {
        if m.start() == m.end() {
            continue;
        }
        out.push_str(&escape_html(&text[last..m.start()]));
        out.push_str(MARK_OPEN);
        out.push_str(&escape_html(m.as_str()));
        out.push_str(MARK_CLOSE);
        last = m.end();
    }

    out.push_str(&escape_html(&text[last..]));
    out
}
