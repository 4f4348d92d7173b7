//! Errors from the Claude Messages API.

use reqwest::header::InvalidHeaderValue;
use serde::Deserialize;
use thiserror::Error;

/// Why a Claude request produced no reply.
#[derive(Debug, Error)]
pub enum ClaudeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status with an error body.
    #[error("API error ({error_type}): {message}")]
    Api { error_type: String, message: String },

    #[error("rate limited, retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    /// The API rejected the key (HTTP 401).
    #[error("API key rejected")]
    Unauthorized,

    /// The key cannot be sent as a header value.
    #[error("invalid API key: {0}")]
    InvalidApiKey(#[from] InvalidHeaderValue),

    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Body of a non-success response: `{"type":"error","error":{...}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl From<ErrorEnvelope> for ClaudeError {
    fn from(envelope: ErrorEnvelope) -> Self {
        Self::Api {
            error_type: envelope.error.kind,
            message: envelope.error.message,
        }
    }
}
