//! Chat endpoints: the recommendation proxy and transcript management.
//!
//! Submissions are not serialized against each other; two in-flight
//! requests append their replies in whatever order they resolve.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::chat::{self, ChatMessage};
use crate::recommend::format_recommendations;
use crate::server::types::ApiErrorType;
use crate::types::AppState;

/// Request body for `POST /chat/message`.
#[derive(Debug, Deserialize)]
pub struct SendMessageBody {
    pub message: String,
}

/// POST /chat/message
///
/// Appends the user message, proxies the text to the recommendation
/// service, appends the system reply (formatted recommendations or the
/// error text), and returns both messages. Every failure mode past the
/// empty-message check still answers 200 with a system-authored error
/// bubble; the chat never breaks.
pub async fn post_send_message(
    State(s): State<Arc<AppState>>,
    Json(body): Json<SendMessageBody>,
) -> Response {
    info!("POST /chat/message");

    if body.message.trim().is_empty() {
        return ApiErrorType::from((
            StatusCode::BAD_REQUEST,
            "No message provided",
            Some("The message field is required in the request body".to_string()),
        ))
        .into_response();
    }

    let user_message = ChatMessage::user(body.message.clone());
    if let Err(e) = s.transcript.append(user_message.clone()) {
        // Persistence trouble degrades to an unpersisted session.
        warn!("Failed to persist user message: {e:#}");
    }

    let (content, recommendations) = match s.recommender.recommend(&body.message).await {
        Ok(recommendations) => (format_recommendations(&recommendations), Some(recommendations)),
        Err(e) => {
            error!("Recommendation request failed: {e}");
            (e.to_chat_message(), None)
        }
    };

    let system_message = ChatMessage::system(content);
    if let Err(e) = s.transcript.append(system_message.clone()) {
        warn!("Failed to persist system message: {e:#}");
    }

    (
        StatusCode::OK,
        Json(json!({
            "messages": [user_message, system_message],
            "recommendations": recommendations,
        })),
    )
        .into_response()
}

/// GET /chat/history
///
/// The transcript, oldest first. A corrupt or missing store degrades to an
/// empty transcript.
pub async fn get_history(State(s): State<Arc<AppState>>) -> Response {
    let messages = s.transcript.load_all().unwrap_or_else(|e| {
        warn!("Failed to load transcript, returning empty: {e:#}");
        Vec::new()
    });

    (StatusCode::OK, Json(messages)).into_response()
}

/// DELETE /chat/history
pub async fn delete_history(State(s): State<Arc<AppState>>) -> Response {
    info!("DELETE /chat/history");

    match s.transcript.clear() {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Transcript cleared" }))).into_response(),
        Err(e) => ApiErrorType::from((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to clear transcript",
            Some(e.to_string()),
        ))
        .into_response(),
    }
}

/// GET /chat/history/export
///
/// Plain-text transcript, one `[timestamp] sender: content` line per
/// message, served as a download.
pub async fn get_history_export(State(s): State<Arc<AppState>>) -> Response {
    let messages = s.transcript.load_all().unwrap_or_else(|e| {
        warn!("Failed to load transcript for export, returning empty: {e:#}");
        Vec::new()
    });

    let body = chat::export_transcript(&messages);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"chat-history.txt\"",
            ),
        ],
        body,
    )
        .into_response()
}
