//! Metadata store error types

use thiserror::Error;

/// Metadata store failures
///
/// Any of these aborts the enrichment call that hit it.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store could not be reached or used
    #[error("Metadata store '{backend}' unavailable: {message}")]
    Unavailable { backend: String, message: String },
}

impl StoreError {
    /// Create an unavailable store error
    pub fn unavailable(backend: &str, message: impl Into<String>) -> Self {
        Self::Unavailable {
            backend: backend.to_string(),
            message: message.into(),
        }
    }

    /// Name of the backend that failed
    pub fn backend(&self) -> &str {
        match self {
            Self::Unavailable { backend, .. } => backend,
        }
    }
}
