//! Index construction from the merged data document.

use super::entry::{EntryKind, SearchableEntry};
use crate::config::DataConfig;
use crate::loader::DataLoader;
use serde_json::Value;
use tracing::debug;

const PROJECT_SEARCH_FIELDS: &[&str] = &["name", "description", "category"];
const ACHIEVEMENT_SEARCH_FIELDS: &[&str] = &["title", "description"];

/// Build the full index from a loaded document.
///
/// A missing document yields an empty index. Each top-level collection is
/// optional; elements that are not JSON objects are skipped. Projects come
/// first, then achievements, each in source order.
pub fn build_index(document: Option<&Value>) -> Vec<SearchableEntry> {
    let Some(document) = document else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    entries.extend(collect(
        document,
        "projects",
        EntryKind::Project,
        "name",
        PROJECT_SEARCH_FIELDS,
    ));
    entries.extend(collect(
        document,
        "achievements",
        EntryKind::Achievement,
        "title",
        ACHIEVEMENT_SEARCH_FIELDS,
    ));
    entries
}

fn collect<'a>(
    document: &'a Value,
    collection: &str,
    kind: EntryKind,
    title_field: &'a str,
    search_fields: &'a [&'a str],
) -> impl Iterator<Item = SearchableEntry> + 'a {
    document
        .get(collection)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|record| record.is_object())
        .map(move |record| SearchableEntry::from_record(kind, record, title_field, search_fields))
}

/// Loads the merged document and builds the index from it.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    url: String,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::with_url(DataConfig::PROJECTS_URL)
    }

    /// Build from a document at a different URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Load and build. Load failures are already logged by the loader, so
    /// they simply produce an empty index here.
    pub async fn build(&self, loader: &DataLoader) -> Vec<SearchableEntry> {
        let document = loader.load_json(&self.url).await;
        let entries = build_index(document.as_deref());
        debug!("Built search index with {} entries from {}", entries.len(), self.url);
        entries
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
