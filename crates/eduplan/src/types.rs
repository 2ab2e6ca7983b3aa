/// Shared application state
use crate::catalog::CourseCatalog;
use crate::chat::{SelectionState, TranscriptStore};
use crate::config::AppConfig;
use crate::grades::GradeTable;
use crate::recommend::RecommendClient;
use std::sync::Arc;

/// Everything the API handlers need, shared behind an `Arc`.
///
/// The catalog and grade table are loaded once at startup and immutable for
/// the session; the transcript store and the per-session selection map are
/// the only mutable pieces.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: CourseCatalog,
    pub grades: GradeTable,
    pub transcript: Arc<dyn TranscriptStore>,
    pub recommender: RecommendClient,
    pub selections: SelectionState,
}
