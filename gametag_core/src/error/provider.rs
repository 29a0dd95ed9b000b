//! Remote tag provider error types

use thiserror::Error;

/// Failure of a single remote tag lookup
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request never produced a response (connect, timeout, TLS)
    #[error("Network error while looking up '{id}': {message}")]
    Network { id: String, message: String },

    /// The provider answered with a non-success HTTP status
    #[error("Provider returned HTTP {status} for '{id}'")]
    HttpStatus { id: String, status: u16 },

    /// The response body could not be interpreted
    #[error("Malformed provider response for '{id}': {message}")]
    MalformedResponse { id: String, message: String },
}

impl ProviderError {
    /// Create a network error
    pub fn network(id: &str, message: impl Into<String>) -> Self {
        Self::Network {
            id: id.to_string(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(id: &str, status: u16) -> Self {
        Self::HttpStatus {
            id: id.to_string(),
            status,
        }
    }

    /// Create a malformed response error
    pub fn malformed(id: &str, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            id: id.to_string(),
            message: message.into(),
        }
    }

    /// Identifier the failed lookup was for
    pub fn id(&self) -> &str {
        match self {
            Self::Network { id, .. } | Self::HttpStatus { id, .. } => id,
            Self::MalformedResponse { id, .. } => id,
        }
    }

    /// Check if a later attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::HttpStatus { status, .. } => matches!(status, 429 | 500..=504),
            Self::MalformedResponse { .. } => false,
        }
    }
}
