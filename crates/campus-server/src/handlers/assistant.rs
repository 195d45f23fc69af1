//! Chat, voice search and campus information endpoints.

use super::{decode_body, timestamp, ApiResult};
use crate::server::AppState;
use axum::{body::Bytes, extract::State, http::HeaderMap, response::IntoResponse, Json};
use campus_core::{campus_info, voice_search};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct VoiceSearchRequest {
    #[serde(default)]
    pub query: String,
}

/// `POST /api/chat`
pub async fn handle_chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    let request: ChatRequest = decode_body(&headers, &body)?;
    let response = state.chat.reply(&request.message, &mut rand::rng());
    debug!(
        "Chat message matched a topic: {}",
        state.chat.recognizes(&request.message)
    );

    Ok(Json(json!({
        "success": true,
        "response": response,
        "timestamp": timestamp(),
    })))
}

/// `POST /api/voice-search`
pub async fn handle_voice_search(headers: HeaderMap, body: Bytes) -> ApiResult<impl IntoResponse> {
    let request: VoiceSearchRequest = decode_body(&headers, &body)?;
    let results = voice_search(&request.query);
    debug!("Voice query {:?} gave {} results", request.query, results.len());

    Ok(Json(json!({
        "success": true,
        "query": request.query,
        "results": results,
        "timestamp": timestamp(),
    })))
}

/// `GET /api/campus-info`
pub async fn handle_campus_info() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "data": campus_info(),
    }))
}
