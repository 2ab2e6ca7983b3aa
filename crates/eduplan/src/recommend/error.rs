//! Error types for the recommendation client.

use thiserror::Error;

/// Errors that can occur while talking to the recommendation service.
#[derive(Debug, Error, Clone)]
pub enum RecommendError {
    /// Network/transport failure
    #[error("Network error: {message}")]
    Network { message: String },

    /// The service reported a failure body
    #[error("{error}")]
    Service {
        error: String,
        details: Option<String>,
    },

    /// The service answered with something other than the expected shape
    #[error("Unexpected response: {message}")]
    UnexpectedResponse { message: String },

    /// Base URL construction failed
    #[error("URL error: {message}")]
    UrlError { message: String },
}

impl RecommendError {
    /// The text surfaced to the user as a system-authored chat message.
    ///
    /// Service failures carry the service's own error and details verbatim;
    /// everything else degrades to a generic line that still names the
    /// underlying failure.
    pub fn to_chat_message(&self) -> String {
        match self {
            RecommendError::Service { error, details } => format!(
                "Error: {}\nDetails: {}",
                error,
                details
                    .as_deref()
                    .unwrap_or("No additional details available")
            ),
            other => format!("An error occurred: {other}. Please try again later."),
        }
    }
}

impl From<reqwest::Error> for RecommendError {
    fn from(err: reqwest::Error) -> Self {
        RecommendError::Network {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for RecommendError {
    fn from(err: url::ParseError) -> Self {
        RecommendError::UrlError {
            message: err.to_string(),
        }
    }
}
