//! Headless state for the widgets that consume navigation signals.
//!
//! - `AchievementMap`: project markers and the info panel
//! - `Timeline`: date-ordered achievements with an active entry
//!
//! Both ignore selection signals for ids they do not know.

mod map;
mod timeline;

pub use map::{category_color, category_name, AchievementMap, MapMarker};
pub use timeline::Timeline;

use serde_json::Value;

pub(crate) use crate::index::record_id;

/// Render a JSON scalar for display without JSON quoting.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// String field of a record, empty when missing or not a string.
pub(crate) fn str_field<'a>(record: &'a Value, field: &str) -> &'a str {
    record.get(field).and_then(Value::as_str).unwrap_or("")
}
