//! Result selection and widget state handlers.

use super::require_str_param;
use crate::server::AppState;
use serde_json::{json, Value};
use sinai_core::{EntryKind, SiteError};

pub async fn select_result(state: &AppState, params: &Value) -> sinai_core::Result<Value> {
    let id = match params.get("id") {
        Some(Value::Number(n)) => n.to_string(),
        _ => require_str_param(params, "id", "id")?,
    };
    let kind_param = require_str_param(params, "kind", "type")?;
    let kind = EntryKind::parse(&kind_param).ok_or_else(|| SiteError::InvalidParams {
        message: format!("Unknown result kind: {}", kind_param),
    })?;

    let outcome = state.api.select_result(&id, kind).await?;
    Ok(serde_json::to_value(outcome)?)
}

pub async fn timeline_state(state: &AppState, _params: &Value) -> sinai_core::Result<Value> {
    let timeline = state.api.timeline_state();
    Ok(json!({
        "count": timeline.len(),
        "current_index": timeline.current_index(),
        "current_id": timeline.current_id(),
        "prev_enabled": timeline.prev_enabled(),
        "next_enabled": timeline.next_enabled(),
        "track_html": timeline.render_track(),
        "details_html": timeline.render_details(),
    }))
}

pub async fn map_state(state: &AppState, _params: &Value) -> sinai_core::Result<Value> {
    let map = state.api.map_state();
    Ok(serde_json::to_value(map)?)
}
