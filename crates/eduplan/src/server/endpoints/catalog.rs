//! Catalog, grade-table, and selection endpoints.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::chat::selection_from_transcript;
use crate::server::types::ApiErrorType;
use crate::server::util::session_key;
use crate::types::AppState;

/// GET /courses
///
/// The full catalog, in load order.
pub async fn get_courses(State(s): State<Arc<AppState>>) -> Response {
    (StatusCode::OK, Json(s.catalog.courses())).into_response()
}

/// GET /grades
///
/// Course codes present in the grade table.
pub async fn get_grade_courses(State(s): State<Arc<AppState>>) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "courses": s.grades.course_codes() })),
    )
        .into_response()
}

/// GET /grades/:code
///
/// Distribution, percentages, and average for one course. The lookup
/// compares normalized codes, so `CS170` finds `COMPSCI 170`.
pub async fn get_grade_distribution(
    Path(code): Path<String>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /grades/{code}");

    match s.grades.get(&code) {
        Some((course_code, record)) => {
            let percentages: Vec<_> = record
                .distribution
                .percentages()
                .into_iter()
                .map(|(grade, pct)| json!({ "grade": grade, "percentage": pct }))
                .collect();

            (
                StatusCode::OK,
                Json(json!({
                    "course_code": course_code,
                    "distribution": record.distribution,
                    "percentages": percentages,
                    "average": record.average,
                })),
            )
                .into_response()
        }
        None => ApiErrorType::from((
            StatusCode::NOT_FOUND,
            "Course not found in grade table",
            Some(format!("No grade record for: {code}")),
        ))
        .into_response(),
    }
}

/// Request body for `POST /selection/toggle`.
#[derive(Debug, Deserialize)]
pub struct ToggleBody {
    pub class_id: i64,
}

/// POST /selection/toggle
///
/// Toggles one course in the session's explicit selection; 404 for a
/// `class_id` outside the catalog.
pub async fn post_toggle_selection(
    State(s): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ToggleBody>,
) -> Response {
    let key = session_key(&headers);
    info!(session = %key, class_id = body.class_id, "POST /selection/toggle");

    if s.catalog.by_id(body.class_id).is_none() {
        return ApiErrorType::from((
            StatusCode::NOT_FOUND,
            "Unknown course",
            Some(format!("No course with class_id {}", body.class_id)),
        ))
        .into_response();
    }

    let selected = s.selections.toggle(&key, body.class_id);
    let mut ids: Vec<i64> = s.selections.selected(&key).into_iter().collect();
    ids.sort_unstable();

    (
        StatusCode::OK,
        Json(json!({ "class_id": body.class_id, "selected": selected, "selection": ids })),
    )
        .into_response()
}

/// GET /selection
///
/// The session's explicit toggles, the transcript-derived auto-selection,
/// and their union (what the schedule endpoints actually lay out).
pub async fn get_selection(State(s): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let key = session_key(&headers);

    let explicit = s.selections.selected(&key);
    let transcript = s.transcript.load_all().unwrap_or_else(|e| {
        warn!("Failed to load transcript for selection: {e:#}");
        Vec::new()
    });
    let auto = selection_from_transcript(&transcript, &s.catalog);

    let mut explicit_ids: Vec<i64> = explicit.iter().copied().collect();
    let mut auto_ids: Vec<i64> = auto.iter().copied().collect();
    let mut effective: Vec<i64> = explicit.union(&auto).copied().collect();
    explicit_ids.sort_unstable();
    auto_ids.sort_unstable();
    effective.sort_unstable();

    (
        StatusCode::OK,
        Json(json!({
            "explicit": explicit_ids,
            "auto": auto_ids,
            "effective": effective,
        })),
    )
        .into_response()
}
