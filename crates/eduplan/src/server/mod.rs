use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::server::endpoints::{catalog, chat, schedule, status};
use crate::types::AppState;

mod endpoints;
mod types;
mod util;

/// Creates the API router.
///
/// # Parameters
/// - `app_state`: The shared application state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let chat_router = Router::new()
        .route("/message", post(chat::post_send_message))
        .route(
            "/history",
            get(chat::get_history).delete(chat::delete_history),
        )
        .route("/history/export", get(chat::get_history_export));

    let schedule_router = Router::new()
        .route("/", get(schedule::get_week))
        .route("/:day", get(schedule::get_day));

    // The dashboard is a browser client on another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(status::get_health))
        .route("/courses", get(catalog::get_courses))
        .route("/grades", get(catalog::get_grade_courses))
        .route("/grades/:code", get(catalog::get_grade_distribution))
        .route("/selection", get(catalog::get_selection))
        .route("/selection/toggle", post(catalog::post_toggle_selection))
        .nest("/chat", chat_router)
        .nest("/schedule", schedule_router)
        .layer(cors)
        .with_state(app_state)
}
