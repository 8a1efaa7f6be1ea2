//! HTTP server implementation using Axum.

use crate::handlers::{handle_data, handle_health, handle_rpc};
use axum::{
    routing::{get, post},
    Router,
};
use sinai_core::SiteApi;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers.
pub struct AppState {
    /// Search, navigation and widget state
    pub api: SiteApi,
    /// Site root; data documents live in its `data/` directory
    pub site_root: PathBuf,
}

/// Build the router over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    // Configure CORS for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/data/:file", get(handle_data))
        .route("/rpc", post(handle_rpc))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind the listener. Returns it with the actual address (useful when
/// port=0).
pub async fn bind(host: &str, port: u16) -> anyhow::Result<(tokio::net::TcpListener, SocketAddr)> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);
    Ok((listener, actual_addr))
}

/// Serve `state` on an already bound listener in the background.
pub fn serve(listener: tokio::net::TcpListener, state: Arc<AppState>) {
    let app = router(state);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });
}
