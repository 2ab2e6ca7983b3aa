//! Schedule endpoints: per-day block geometry for the weekly grid.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

use crate::catalog::{format_course_title, sort_courses, Course};
use crate::chat::selection_from_transcript;
use crate::schedule::{self, TimeBlock, Weekday};
use crate::server::types::ApiErrorType;
use crate::server::util::session_key;
use crate::types::AppState;

/// The effective selection for layout: explicit per-session toggles plus
/// the courses named in system messages of the transcript. Sorted with the
/// companion sort so the visual order is stable across renders.
fn effective_selection(s: &AppState, headers: &HeaderMap) -> Vec<Course> {
    let key = session_key(headers);
    let mut selected_ids = s.selections.selected(&key);

    let transcript = s.transcript.load_all().unwrap_or_else(|e| {
        warn!("Failed to load transcript for auto-selection: {e:#}");
        Vec::new()
    });
    selected_ids.extend(selection_from_transcript(&transcript, &s.catalog));

    let mut courses: Vec<Course> = s
        .catalog
        .courses()
        .iter()
        .filter(|c| selected_ids.contains(&c.class_id))
        .cloned()
        .collect();
    sort_courses(&mut courses);
    courses
}

fn block_to_json(block: &TimeBlock<'_>) -> Value {
    json!({
        "class_id": block.course.class_id,
        "course_code": block.course.course_code,
        "title": format_course_title(&block.course.title),
        "enrolled": block.course.enrolled,
        "max_enroll": block.course.max_enroll,
        "start_index": block.start_index,
        "end_index": block.end_index,
        "has_overlap": block.has_overlap,
        "lane": block.lane(),
        "style": schedule::style_for(block.course),
    })
}

/// GET /schedule
///
/// Block lists for all five weekday columns.
pub async fn get_week(State(s): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    info!("GET /schedule");

    let selected = effective_selection(&s, &headers);
    let days: Vec<Value> = schedule::layout_week(&selected)
        .into_iter()
        .map(|(day, blocks)| {
            json!({
                "day": day.name(),
                "blocks": blocks.iter().map(block_to_json).collect::<Vec<_>>(),
            })
        })
        .collect();

    (StatusCode::OK, Json(json!({ "days": days }))).into_response()
}

/// GET /schedule/:day
///
/// Block list for one weekday column; 400 on an unknown day name.
pub async fn get_day(
    Path(day): Path<String>,
    State(s): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    info!("GET /schedule/{day}");

    let Some(day) = Weekday::from_name(&day) else {
        return ApiErrorType::from((
            StatusCode::BAD_REQUEST,
            "Unknown day",
            Some(format!("expected one of Monday..Friday, got {day:?}")),
        ))
        .into_response();
    };

    let selected = effective_selection(&s, &headers);
    let blocks: Vec<Value> = schedule::layout_day(&selected, day)
        .iter()
        .map(block_to_json)
        .collect();

    (
        StatusCode::OK,
        Json(json!({ "day": day.name(), "blocks": blocks })),
    )
        .into_response()
}
