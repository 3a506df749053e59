pub mod gesture;
pub mod songs;

use crate::{AppState, Result};
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "app": "song-gesture-backend"
    }))
}

/// Serve the entry page. A missing file surfaces as a server error.
pub async fn index_page(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse> {
    let path = state.config.index_path();
    let html = tokio::fs::read(&path).await.map_err(|e| {
        tracing::error!("Failed to read entry page {}: {}", path.display(), e);
        e
    })?;

    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html))
}
