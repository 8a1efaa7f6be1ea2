//! Navigation signal payloads.

use crate::index::EntryKind;
use serde::{Deserialize, Serialize};

/// One-way selection request carrying only an entity id.
///
/// Serialized with the page's event names, e.g.
/// `{"event":"search:selectProject","detail":{"projectId":"p1"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "detail")]
pub enum NavigationSignal {
    #[serde(rename = "search:selectProject", rename_all = "camelCase")]
    SelectProject { project_id: String },
    #[serde(rename = "search:selectAchievement", rename_all = "camelCase")]
    SelectAchievement { achievement_id: String },
}

impl NavigationSignal {
    /// Signal selecting the entity `id` of the given kind.
    pub fn select(kind: EntryKind, id: impl Into<String>) -> Self {
        match kind {
            EntryKind::Project => NavigationSignal::SelectProject {
                project_id: id.into(),
            },
            EntryKind::Achievement => NavigationSignal::SelectAchievement {
                achievement_id: id.into(),
            },
        }
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            NavigationSignal::SelectProject { .. } => "search:selectProject",
            NavigationSignal::SelectAchievement { .. } => "search:selectAchievement",
        }
    }

    pub fn entity_id(&self) -> &str {
        match self {
            NavigationSignal::SelectProject { project_id } => project_id,
            NavigationSignal::SelectAchievement { achievement_id } => achievement_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_picks_variant_by_kind() {
        assert_eq!(
            NavigationSignal::select(EntryKind::Project, "p1"),
            NavigationSignal::SelectProject {
                project_id: "p1".into()
            }
        );
        let signal = NavigationSignal::select(EntryKind::Achievement, "a1");
        assert_eq!(signal.event_name(), "search:selectAchievement");
        assert_eq!(signal.entity_id(), "a1");
    }

    #[test]
    fn test_wire_shape_uses_event_names() {
        let value = serde_json::to_value(NavigationSignal::select(EntryKind::Project, "p1")).unwrap();
        assert_eq!(
            value,
            json!({"event": "search:selectProject", "detail": {"projectId": "p1"}})
        );

        let parsed: NavigationSignal = serde_json::from_value(json!({
            "event": "search:selectAchievement",
            "detail": {"achievementId": "a7"}
        }))
        .unwrap();
        assert_eq!(parsed.entity_id(), "a7");
    }
}
