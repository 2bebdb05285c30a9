// Error types for LabScan
//
// Every library call returns `Result<T, LabError>`. Transport, HTTP status and
// decode failures are passed through as-is; nothing is retried.

use crate::models::AssessmentStatus;
use thiserror::Error;

/// Main error type for LabScan operations
#[derive(Debug, Error)]
pub enum LabError {
    /// Network or timeout failure reported by the HTTP transport
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with something other than 200 OK
    #[error("API return HTTP code {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Response body is not valid JSON for the expected record
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Endpoint detail requested before the assessment reached READY
    #[error(
        "Retrieving detailed information for {host} possible only with status READY (current: {status})"
    )]
    NotReady {
        host: String,
        status: AssessmentStatus,
    },

    /// Invalid client configuration or request parameters
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Base URL could not be parsed or joined
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl LabError {
    /// HTTP status code carried by the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LabError::HttpStatus { status, .. } => Some(*status),
            LabError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The client exceeded its concurrent assessment or cool-off limits
    pub fn is_rate_limited(&self) -> bool {
        self.status_code() == Some(429)
    }

    /// The service is down for maintenance (503) or overloaded (529)
    pub fn is_service_unavailable(&self) -> bool {
        matches!(self.status_code(), Some(503) | Some(529))
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        LabError::Config {
            message: message.into(),
        }
    }
}

/// Result type for LabScan operations
pub type Result<T> = std::result::Result<T, LabError>;
