use crate::{
    models::{GestureAck, GestureEvent},
    AppError, Result,
};
use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;

/// Log the posted gesture and echo it back. Nothing else happens with it.
pub async fn record_gesture(
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<GestureAck>> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let event = GestureEvent::from_payload(payload);
    tracing::info!("Received gesture: {}", event.label());

    Ok(Json(GestureAck::from(event)))
}
