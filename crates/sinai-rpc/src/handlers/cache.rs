//! Document cache handlers.

use super::require_str_param;
use crate::server::AppState;
use serde_json::{json, Value};

pub async fn clear_cache(state: &AppState, _params: &Value) -> sinai_core::Result<Value> {
    state.api.clear_cache();
    Ok(json!({"success": true}))
}

pub async fn evict_cache(state: &AppState, params: &Value) -> sinai_core::Result<Value> {
    let url = require_str_param(params, "url", "url")?;
    let evicted = state.api.evict_cache(&url);
    Ok(json!({
        "success": true,
        "evicted": evicted,
    }))
}
