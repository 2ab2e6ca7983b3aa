/// Recommendation service client and display formatting
mod client;
mod error;
mod types;

pub use client::{RecommendClient, RecommendConfig};
pub use error::RecommendError;
pub use types::{Recommendation, RecommendRequest, RecommendResponse, ServiceErrorBody};

/// Formats recommendation entries into the display text appended to the
/// chat transcript. This is the text course codes are later extracted from,
/// so each entry leads with the decorated course code.
pub fn format_recommendations(recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return "No suitable courses found based on your input.".to_string();
    }

    recommendations
        .iter()
        .map(|course| {
            let class_times = if course.class_times.is_empty() {
                "N/A".to_string()
            } else {
                course.class_times.join(", ")
            };
            format!(
                "🎓 {}: {}\n📊 Average Grade: {}\n📚 Workload: {}\n📅 Class Times: {}\n💡 Recommendation Reason: {}\n📝 Comments: {}\n",
                course.course_code,
                course.title,
                course.average_grade.as_deref().unwrap_or("N/A"),
                course.workload.as_deref().unwrap_or("N/A"),
                class_times,
                course.reason.as_deref().unwrap_or("N/A"),
                course.comments.as_deref().unwrap_or("N/A"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
