//! Query engine owning the search index.

use super::highlight::{highlight_with, query_pattern};
use super::snippet::snippet_with;
use crate::config::SearchConfig;
use crate::index::{IndexBuilder, SearchableEntry};
use crate::loader::DataLoader;
use serde::Serialize;
use tracing::debug;

/// One matched entry with its rendered preview.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub entry: SearchableEntry,
    /// Escaped, highlighted excerpt of the description.
    pub snippet: String,
    /// Escaped, highlighted title.
    pub highlighted_title: String,
}

/// Substring search over a fully rebuilt, in-memory index.
#[derive(Default)]
pub struct QueryEngine {
    entries: Vec<SearchableEntry>,
    builder: IndexBuilder,
}

impl QueryEngine {
    /// Create an engine with an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine that rebuilds from a non-default document URL.
    pub fn with_builder(builder: IndexBuilder) -> Self {
        Self {
            entries: Vec::new(),
            builder,
        }
    }

    /// Create an engine over an already built index.
    pub fn with_entries(entries: Vec<SearchableEntry>) -> Self {
        Self {
            entries,
            builder: IndexBuilder::default(),
        }
    }

    /// Reload the source document and replace the whole index.
    ///
    /// Returns the new entry count; a failed load leaves the index empty.
    pub async fn rebuild(&mut self, loader: &DataLoader) -> usize {
        let entries = self.builder.build(loader).await;
        self.replace_entries(entries)
    }

    /// Replace the whole index with `entries`.
    pub fn replace_entries(&mut self, entries: Vec<SearchableEntry>) -> usize {
        self.entries = entries;
        self.entries.len()
    }

    pub fn builder(&self) -> &IndexBuilder {
        &self.builder
    }

    pub fn entries(&self) -> &[SearchableEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run a query.
    ///
    /// Queries under `SearchConfig::MIN_QUERY_LEN` characters (no trimming)
    /// return nothing. Matches keep index order; every result's snippet and
    /// title are computed before this returns.
    pub fn search(&self, query: &str) -> Vec<QueryResult> {
        let query_len = query.chars().count();
        if query_len < SearchConfig::MIN_QUERY_LEN {
            return Vec::new();
        }

        let Some(pattern) = query_pattern(query) else {
            return Vec::new();
        };
        let lower_query = query.to_lowercase();

        let results: Vec<QueryResult> = self
            .entries
            .iter()
            .filter(|entry| entry.matches(&lower_query))
            .map(|entry| QueryResult {
                highlighted_title: highlight_with(&pattern, &entry.display_title),
                snippet: snippet_with(
                    &pattern,
                    &entry.display_description,
                    query_len,
                    SearchConfig::SNIPPET_MAX_LENGTH,
                ),
                entry: entry.clone(),
            })
            .collect();

        debug!("Query {:?} matched {} of {} entries", query, results.len(), self.entries.len());
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataConfig;
    use crate::index::{build_index, EntryKind};
    use crate::loader::StaticFetcher;
    use serde_json::json;
    use std::sync::Arc;

    fn engine() -> QueryEngine {
        let doc = json!({
            "projects": [
                {"id": "p1", "name": "Water Plant", "description": "New plant in Sinai", "category": "infrastructure"},
                {"id": "p2", "name": "Arish Port", "description": "Port expansion for C++ trade (phase 2)", "category": "transportation"}
            ],
            "achievements": [
                {"id": "a1", "title": "Clean water for Rafah", "description": "Pipeline finished", "date": "2022-01-01"}
            ]
        });
        QueryEngine::with_entries(build_index(Some(&doc)))
    }

    #[test]
    fn test_scenario_water_query() {
        let doc = json!({
            "projects": [{"id": "p1", "name": "Water Plant", "description": "New plant in Sinai", "category": "infrastructure"}],
            "achievements": []
        });
        let engine = QueryEngine::with_entries(build_index(Some(&doc)));

        let results = engine.search("water");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, "p1");
        assert!(results[0].highlighted_title.contains("<mark>Water</mark>"));
    }

    #[test]
    fn test_short_queries_return_nothing() {
        let engine = engine();
        assert!(engine.search("").is_empty());
        assert!(engine.search("w").is_empty());
        assert!(engine.search(" ").is_empty());
        assert!(engine.search("س").is_empty());
    }

    #[test]
    fn test_length_gate_does_not_trim() {
        // Two spaces pass the gate but match nothing.
        assert!(engine().search("  ").is_empty());
        // The leading space is part of the needle.
        let results = engine().search(" p");
        assert!(results.iter().any(|r| r.entry.id == "p1"));
    }

    #[test]
    fn test_case_does_not_affect_membership() {
        let engine = engine();
        let ids = |q: &str| {
            engine
                .search(q)
                .into_iter()
                .map(|r| (r.entry.kind, r.entry.id))
                .collect::<Vec<_>>()
        };
        assert_eq!(ids("water"), ids("WATER"));
        assert_eq!(ids("water"), ids("wAtEr"));
        assert_eq!(
            ids("water"),
            vec![
                (EntryKind::Project, "p1".to_string()),
                (EntryKind::Achievement, "a1".to_string())
            ]
        );
    }

    #[test]
    fn test_category_is_searchable_but_not_displayed() {
        let results = engine().search("transportation");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, "p2");
        assert!(!results[0].snippet.contains("<mark>"));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        assert!(engine().search("xyz-nomatch").is_empty());
    }

    #[test]
    fn test_special_characters_in_query() {
        let engine = engine();

        let results = engine.search("c++");
        assert_eq!(results.len(), 1);
        assert!(results[0].snippet.contains("<mark>C++</mark>"));

        let results = engine.search("(phase");
        assert_eq!(results.len(), 1);
        assert!(results[0].snippet.contains("<mark>(phase</mark>"));

        assert!(engine.search(".*").is_empty());
        assert!(engine.search("[a").is_empty());
    }

    #[tokio::test]
    async fn test_rebuild_replaces_index() {
        let fetcher = Arc::new(StaticFetcher::new().with_document(
            DataConfig::PROJECTS_URL,
            json!({"projects": [{"id": "p9", "name": "Bridge", "description": "", "category": ""}]}),
        ));
        let loader = DataLoader::new(fetcher);

        let mut engine = engine();
        assert_eq!(engine.len(), 3);

        assert_eq!(engine.rebuild(&loader).await, 1);
        assert_eq!(engine.entries()[0].id, "p9");
        assert!(engine.search("water").is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_yields_empty_results() {
        let loader = DataLoader::new(Arc::new(StaticFetcher::new()));
        let mut engine = engine();

        assert_eq!(engine.rebuild(&loader).await, 0);
        assert!(engine.is_empty());
        assert!(engine.search("water").is_empty());
        assert!(engine.search("anything at all").is_empty());
    }
}
