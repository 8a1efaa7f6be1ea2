//! Search handlers.

use super::require_str_param;
use crate::server::AppState;
use serde_json::{json, Value};

pub async fn search(state: &AppState, params: &Value) -> sinai_core::Result<Value> {
    let query = require_str_param(params, "query", "query")?;
    let results = state.api.search(&query);
    Ok(json!({
        "success": true,
        "count": results.len(),
        "results": serde_json::to_value(results)?,
    }))
}

pub async fn render_search(state: &AppState, params: &Value) -> sinai_core::Result<Value> {
    let query = require_str_param(params, "query", "query")?;
    let rendered = state.api.render_search(&query);
    Ok(serde_json::to_value(rendered)?)
}

pub async fn rebuild_index(state: &AppState, _params: &Value) -> sinai_core::Result<Value> {
    let count = state.api.rebuild_index().await;
    Ok(json!({
        "success": true,
        "entries": count,
    }))
}
