/// Application configuration
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Top-level configuration, loaded from a JSON file at startup. Every field
/// has a default so a partial file works.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the API server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Base URL of the external recommendation service
    #[serde(default = "default_recommend_base_url")]
    pub recommend_base_url: String,

    /// Path to the course catalog JSON
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Path to the grade-distribution JSON
    #[serde(default = "default_grades_path")]
    pub grades_path: String,

    /// Path to the SQLite transcript database
    #[serde(default = "default_transcript_db_path")]
    pub transcript_db_path: String,
}

fn default_bind_address() -> String {
    "0.0.0.0:3001".to_string()
}

fn default_recommend_base_url() -> String {
    "http://localhost:2000".to_string()
}

fn default_catalog_path() -> String {
    "data/courses.json".to_string()
}

fn default_grades_path() -> String {
    "data/grades.json".to_string()
}

fn default_transcript_db_path() -> String {
    "transcript.db".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            recommend_base_url: default_recommend_base_url(),
            catalog_path: default_catalog_path(),
            grades_path: default_grades_path(),
            transcript_db_path: default_transcript_db_path(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a JSON file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config from {}", path.display()))?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default configuration: {e:#}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "bind_address": "127.0.0.1:9000" }"#).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.recommend_base_url, "http://localhost:2000");
        assert_eq!(config.catalog_path, "data/courses.json");
    }

    #[test]
    fn test_empty_object_is_all_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.bind_address, AppConfig::default().bind_address);
    }
}
