//! Small helpers shared by the endpoint handlers.

use crate::chat::SessionKey;
use axum::http::HeaderMap;

/// Header carrying the dashboard's session identifier.
pub const SESSION_HEADER: &str = "x-session-id";

/// Derives the session key from request headers. Clients that don't send
/// the header share one anonymous session.
pub fn session_key(headers: &HeaderMap) -> SessionKey {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(SessionKey::from_client_id)
        .unwrap_or_else(SessionKey::anonymous)
}
