use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use super::{ClientMessage, HealthResponse};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::tts::SynthesisResponse;

/// Parse the caller's message. The body is read as raw bytes so a missing
/// `Content-Type` is not an error on its own.
fn parse_message(body: &[u8]) -> Result<ClientMessage, AppError> {
    let message: ClientMessage =
        serde_json::from_slice(body).map_err(|e| AppError::InvalidRequest(e.to_string()))?;

    if message.text.trim().is_empty() {
        return Err(AppError::InvalidRequest("Text cannot be empty".into()));
    }

    Ok(message)
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SynthesisResponse>, AppError> {
    let message = parse_message(&body)?;

    tracing::info!("Relaying {} chars to upstream", message.text.chars().count());

    // Dropping this future (caller gone) also drops the outbound request.
    let response = state.tts.synthesize(&message.text).await?;

    Ok(Json(response))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
