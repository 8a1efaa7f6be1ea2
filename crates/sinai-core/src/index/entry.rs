//! Searchable entry types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source collection an entry was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Project,
    Achievement,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Project => "project",
            EntryKind::Achievement => "achievement",
        }
    }

    /// Label shown on result cards.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Project => "مشروع",
            EntryKind::Achievement => "إنجاز",
        }
    }

    /// Parse either the machine name or the display label.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "project" | "مشروع" => Some(EntryKind::Project),
            "achievement" | "إنجاز" => Some(EntryKind::Achievement),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One unified, searchable record.
///
/// `id` is unique only within its source collection, so `(kind, id)` is the
/// identity across the whole index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchableEntry {
    pub id: String,
    pub kind: EntryKind,
    pub display_title: String,
    pub display_description: String,
    /// Lower-cased concatenation of the searchable source fields.
    #[serde(skip)]
    pub search_text: String,
    /// The source record, unchanged.
    pub record: Value,
}

impl SearchableEntry {
    /// Build an entry from a source record.
    ///
    /// `title_field` names the heading field; `search_fields` are joined with
    /// single spaces before lower-casing. Missing fields read as empty.
    pub fn from_record(
        kind: EntryKind,
        record: &Value,
        title_field: &str,
        search_fields: &[&str],
    ) -> Self {
        let search_text = search_fields
            .iter()
            .map(|field| text_field(record, field))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Self {
            id: record_id(record).unwrap_or_default(),
            kind,
            display_title: text_field(record, title_field),
            display_description: text_field(record, "description"),
            search_text,
            record: record.clone(),
        }
    }

    /// Case-insensitive containment test against the precomputed text.
    pub fn matches(&self, lower_query: &str) -> bool {
        self.search_text.contains(lower_query)
    }
}

fn text_field(record: &Value, field: &str) -> String {
    match record.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Id of a record as a string; numeric ids are rendered in decimal.
pub(crate) fn record_id(record: &Value) -> Option<String> {
    match record.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
