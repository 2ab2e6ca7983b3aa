/// Types for course catalog data
use serde::{Deserialize, Serialize};

/// A single course record from the catalog file.
///
/// `class_times` entries look like `"MoWe 10:00-11:30"`. The list may be
/// empty or malformed; consumers must treat that as "no schedule
/// contribution", never as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub class_id: i64,
    pub course_code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Kept as a string; the source data carries values like "4" and "2-4".
    #[serde(default)]
    pub credits: String,
    #[serde(default)]
    pub enrolled: i64,
    #[serde(default)]
    pub max_enroll: i64,
    #[serde(default)]
    pub reserved: i64,
    #[serde(default)]
    pub waitlisted: i64,
    #[serde(default)]
    pub class_times: Vec<String>,
    #[serde(default)]
    pub url: String,
}
