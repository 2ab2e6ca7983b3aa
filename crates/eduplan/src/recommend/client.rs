//! HTTP client for the external recommendation service.
//!
//! One JSON exchange per submission: `POST /api/recommend` with the user's
//! free text, answered by a `recommendations` array or an
//! `{ error, details? }` body. No retries, no deduplication of concurrent
//! submissions, no cancellation.

use super::error::RecommendError;
use super::types::{RecommendRequest, Recommendation, RecommendResponse, ServiceErrorBody};
use rand::Rng;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{error, info};
use url::Url;

/// Configuration for the recommendation client.
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    /// Base URL of the recommendation service
    pub base_url: String,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout; the service runs a slow multi-step pipeline
    pub request_timeout: Duration,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:2000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// Client for fetching course recommendations.
pub struct RecommendClient {
    client: Client,
    endpoint: String,
}

impl RecommendClient {
    /// Creates a client with default configuration.
    pub fn new() -> Result<Self, RecommendError> {
        Self::with_config(RecommendConfig::default())
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: RecommendConfig) -> Result<Self, RecommendError> {
        // Validate the base URL up front so a bad config fails at startup,
        // not on the first chat submission.
        let base = Url::parse(&config.base_url)?;
        let endpoint = format!(
            "{}/api/recommend",
            base.as_str().trim_end_matches('/')
        );

        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| RecommendError::Network {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, endpoint })
    }

    /// Sends one free-text query and returns the recommended courses.
    pub async fn recommend(&self, message: &str) -> Result<Vec<Recommendation>, RecommendError> {
        let correlation_id = generate_correlation_id();
        let start = Instant::now();

        info!(
            correlation_id = %correlation_id,
            url = %self.endpoint,
            "Requesting course recommendations"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&RecommendRequest { message })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = match serde_json::from_str::<ServiceErrorBody>(&body) {
                Ok(parsed) => RecommendError::Service {
                    error: parsed.error,
                    details: parsed.details,
                },
                Err(_) => RecommendError::UnexpectedResponse {
                    message: format!("service returned status {status}"),
                },
            };
            error!(
                correlation_id = %correlation_id,
                status = %status,
                error = %err,
                "Recommendation request failed"
            );
            return Err(err);
        }

        let parsed: RecommendResponse =
            serde_json::from_str(&body).map_err(|e| RecommendError::UnexpectedResponse {
                message: format!("invalid JSON in success response: {e}"),
            })?;

        match parsed.recommendations {
            Some(recommendations) => {
                info!(
                    correlation_id = %correlation_id,
                    count = recommendations.len(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Received recommendations"
                );
                Ok(recommendations)
            }
            None => Err(RecommendError::UnexpectedResponse {
                message: "response missing recommendations array".to_string(),
            }),
        }
    }
}

/// Generates a unique correlation ID for request tracing.
fn generate_correlation_id() -> String {
    let timestamp = chrono::Utc::now().timestamp_micros();
    let random: u32 = rand::thread_rng().gen();
    format!("{:x}-{:08x}", timestamp & 0xFFFF_FFFF, random)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_built_from_base_url() {
        let client = RecommendClient::with_config(RecommendConfig {
            base_url: "http://localhost:2000/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.endpoint, "http://localhost:2000/api/recommend");
    }

    #[test]
    fn test_invalid_base_url_is_rejected_at_construction() {
        let result = RecommendClient::with_config(RecommendConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(RecommendError::UrlError { .. })));
    }

    #[test]
    fn test_correlation_ids_are_distinct() {
        assert_ne!(generate_correlation_id(), generate_correlation_id());
    }
}
