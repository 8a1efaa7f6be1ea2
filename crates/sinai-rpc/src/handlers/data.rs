//! Static data documents served from the site root.

use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde_json::json;
use sinai_core::config::DataConfig;
use std::sync::Arc;
use tracing::{debug, warn};

/// `GET /data/:file`: serve one JSON document from `<site_root>/data`.
pub async fn handle_data(
    State(state): State<Arc<AppState>>,
    Path(file): Path<String>,
) -> impl IntoResponse {
    if !is_plain_json_name(&file) {
        warn!("Rejected data request for {:?}", file);
        return (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            json!({"error": "invalid document name"}).to_string(),
        );
    }

    let path = state.site_root.join(DataConfig::DATA_DIR_NAME).join(&file);
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => {
            debug!("Serving {}", path.display());
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
        }
        Err(e) => {
            debug!("Data document {} unavailable: {}", path.display(), e);
            (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "application/json")],
                json!({"error": "not found"}).to_string(),
            )
        }
    }
}

/// A single `.json` file name with no path components.
fn is_plain_json_name(file: &str) -> bool {
    file.ends_with(".json")
        && !file.starts_with('.')
        && !file.contains(['/', '\\'])
        && !file.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json_name() {
        assert!(is_plain_json_name("projects.json"));
        assert!(!is_plain_json_name("../secret.json"));
        assert!(!is_plain_json_name(".hidden.json"));
        assert!(!is_plain_json_name("projects.txt"));
        assert!(!is_plain_json_name("a\\b.json"));
    }
}
