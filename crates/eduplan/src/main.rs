mod catalog;
mod chat;
mod config;
mod grades;
mod recommend;
mod schedule;
mod server;
mod types;

use crate::catalog::CourseCatalog;
use crate::chat::{SelectionState, SqliteTranscriptStore};
use crate::config::AppConfig;
use crate::grades::GradeTable;
use crate::recommend::{RecommendClient, RecommendConfig};
use crate::types::AppState;
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/eduplan.json".to_string());
    let config = AppConfig::load_or_default(Path::new(&config_path));

    let catalog = CourseCatalog::load_or_empty(Path::new(&config.catalog_path));
    if catalog.is_empty() {
        warn!("Course catalog is empty; the schedule grid will have nothing to lay out");
    } else {
        info!("Loaded {} courses from {}", catalog.len(), config.catalog_path);
    }

    let grades = GradeTable::load_or_empty(Path::new(&config.grades_path));
    info!("Loaded {} grade records from {}", grades.len(), config.grades_path);

    let transcript = Arc::new(
        SqliteTranscriptStore::new(&config.transcript_db_path)
            .with_context(|| format!("opening transcript db at {}", config.transcript_db_path))?,
    );

    let recommender = RecommendClient::with_config(RecommendConfig {
        base_url: config.recommend_base_url.clone(),
        ..Default::default()
    })
    .context("building recommendation client")?;

    let state = Arc::new(AppState {
        catalog,
        grades,
        transcript,
        recommender,
        selections: SelectionState::new(),
        config: config.clone(),
    });

    let router = server::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("binding to {}", config.bind_address))?;
    info!("Listening on {}", config.bind_address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install ctrl-c handler: {e}");
        return;
    }
    info!("Shutdown signal received");
}
