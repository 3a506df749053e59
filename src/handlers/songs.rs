use crate::{models::Song, AppError, AppState, Result};
use axum::{
    body::Body,
    extract::{Path, Request, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeFile;

pub async fn list_songs(State(state): State<Arc<AppState>>) -> Json<Vec<Song>> {
    Json(state.catalog.songs().to_vec())
}

/// Song ids are plain unsigned decimal numbers. Signs, whitespace and values
/// beyond `u32` are not ids.
fn parse_song_id(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn song_not_found() -> AppError {
    AppError::NotFound("Song not found".to_string())
}

/// Serve the audio file for song `id`, with range and conditional request
/// handling. Malformed ids, unknown ids and missing files all answer 404 with
/// the same body.
pub async fn stream_song(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    request: Request<Body>,
) -> Result<Response> {
    let id = parse_song_id(&raw_id).ok_or_else(song_not_found)?;

    let path = state
        .catalog
        .locate_audio(&state.config, id)
        .await?
        .ok_or_else(song_not_found)?;

    tracing::debug!("Serving song {} from {}", id, path.display());

    let response = match ServeFile::new(&path).oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    Ok(response.into_response())
}
