/// Wire types for the recommendation exchange
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/recommend`.
#[derive(Debug, Serialize)]
pub struct RecommendRequest<'a> {
    pub message: &'a str,
}

/// One recommended course as returned by the service.
///
/// Only `course_code` and `title` are load-bearing; everything else is
/// display text and may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub course_code: String,
    pub title: String,
    #[serde(default)]
    pub average_grade: Option<String>,
    #[serde(default)]
    pub workload: Option<String>,
    #[serde(default)]
    pub class_times: Vec<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

/// Success body. A response without a `recommendations` array is treated as
/// an error condition by the client.
#[derive(Debug, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure body: `{ "error": ..., "details"?: ... }`.
#[derive(Debug, Deserialize)]
pub struct ServiceErrorBody {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}
