//! HTML rendering of search results.

use crate::query::{escape_html, QueryResult};
use serde::Serialize;

/// Section pages suggested when a query finds nothing: (href, label).
pub const SUGGESTED_LINKS: &[(&str, &str)] = &[
    ("/pages/infrastructure.html", "مشاريع البنية التحتية"),
    ("/pages/agriculture.html", "المبادرات الزراعية"),
    ("/pages/products.html", "الموارد المحلية"),
];

/// Which rendering path a query took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "html", rename_all = "snake_case")]
pub enum RenderedResults {
    /// Query too short: the results container is emptied.
    Cleared,
    /// No matches: the "no results" block.
    Empty(String),
    /// One or more matches.
    List(String),
}

impl RenderedResults {
    pub fn html(&self) -> &str {
        match self {
            RenderedResults::Cleared => "",
            RenderedResults::Empty(html) | RenderedResults::List(html) => html,
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, RenderedResults::Empty(_))
    }
}

/// Render the results container for `query`.
pub fn render_results(results: &[QueryResult], query: &str) -> RenderedResults {
    if results.is_empty() {
        return RenderedResults::Empty(render_empty(query));
    }

    let items: String = results.iter().map(render_result).collect();
    RenderedResults::List(format!(
        concat!(
            "<div class=\"search-results__header\">",
            "<p>تم العثور على {} نتيجة</p>",
            "</div>",
            "<ul class=\"search-results__list\">{}</ul>"
        ),
        results.len(),
        items
    ))
}

/// The "no results" block, echoing the escaped query.
pub fn render_empty(query: &str) -> String {
    let links: String = SUGGESTED_LINKS
        .iter()
        .map(|(href, label)| format!("<li><a href=\"{}\">{}</a></li>", href, label))
        .collect();

    format!(
        concat!(
            "<div class=\"search-results__empty\">",
            "<p>لم يتم العثور على نتائج لـ \"{}\"</p>",
            "<p>جرب كلمات مفتاحية مختلفة أو تصفح أقسامنا:</p>",
            "<ul>{}</ul>",
            "</div>"
        ),
        escape_html(query),
        links
    )
}

/// One result card. Title and snippet arrive already escaped and highlighted.
pub fn render_result(result: &QueryResult) -> String {
    let entry = &result.entry;
    format!(
        concat!(
            "<li class=\"search-result\">",
            "<a href=\"#\" class=\"search-result__link\" data-result-id=\"{id}\" data-result-type=\"{kind}\">",
            "<span class=\"search-result__type\">{label}</span>",
            "<h3 class=\"search-result__title\">{title}</h3>",
            "<p class=\"search-result__snippet\">{snippet}</p>",
            "</a>",
            "</li>"
        ),
        id = escape_html(&entry.id),
        kind = entry.kind.as_str(),
        label = entry.kind.label(),
        title = result.highlighted_title,
        snippet = result.snippet,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;
    use crate::query::QueryEngine;
    use serde_json::json;

    fn engine() -> QueryEngine {
        QueryEngine::with_entries(build_index(Some(&json!({
            "projects": [
                {"id": "p1", "name": "Water Plant", "description": "New plant in Sinai", "category": "infrastructure"}
            ],
            "achievements": [
                {"id": "a\"1", "title": "Water <b>pipeline</b>", "description": "Done", "date": "2020-01-01"}
            ]
        }))))
    }

    #[test]
    fn test_list_contains_header_and_cards() {
        let engine = engine();
        let results = engine.search("water");
        let rendered = render_results(&results, "water");

        let RenderedResults::List(html) = &rendered else {
            panic!("expected list, got {:?}", rendered);
        };
        assert!(html.contains("تم العثور على 2 نتيجة"));
        assert!(html.contains("data-result-id=\"p1\" data-result-type=\"project\""));
        assert!(html.contains("data-result-type=\"achievement\""));
        assert!(html.contains("<h3 class=\"search-result__title\"><mark>Water</mark> Plant</h3>"));
        assert_eq!(html.matches("<li class=\"search-result\">").count(), 2);
    }

    #[test]
    fn test_content_is_escaped_in_cards() {
        let engine = engine();
        let results = engine.search("pipeline");
        let html = render_result(&results[0]);

        assert!(html.contains("data-result-id=\"a&quot;1\""));
        assert!(html.contains("&lt;b&gt;<mark>pipeline</mark>&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_no_results_path() {
        let rendered = render_results(&[], "xyz-nomatch");
        assert!(rendered.is_empty_state());
        assert!(rendered.html().contains("\"xyz-nomatch\""));
        for (href, _) in SUGGESTED_LINKS {
            assert!(rendered.html().contains(href));
        }
    }

    #[test]
    fn test_no_results_escapes_query() {
        let html = render_empty("<img src=x>");
        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_cleared_has_no_html() {
        assert_eq!(RenderedResults::Cleared.html(), "");
    }
}
