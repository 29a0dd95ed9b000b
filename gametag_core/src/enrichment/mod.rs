//! Tag enrichment for catalog entries
//!
//! This module ties the metadata store and a tag provider together: pick the
//! highest-priority entries, serve what the store already knows, fetch the
//! rest concurrently and write the new results back.

pub mod orchestrator;
pub mod selection;

pub use orchestrator::{EnrichmentOrchestrator, EnrichmentOutcome, EnrichmentStats};
pub use selection::{candidate_ids, select_candidates};

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Number of entries enriched per call unless configured otherwise
pub const DEFAULT_TOP_K: usize = 20;

/// Options for an enrichment orchestrator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichmentConfig {
    /// How many entries, by descending priority, are considered per call
    pub top_k: usize,
    /// Cap on in-flight provider lookups; `None` fetches every miss at once
    #[serde(default)]
    pub max_concurrent_lookups: Option<usize>,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            max_concurrent_lookups: None,
        }
    }
}

impl EnrichmentConfig {
    /// Create a test configuration
    pub fn test() -> Self {
        Self {
            top_k: 5,
            max_concurrent_lookups: None,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_max_concurrent_lookups(mut self, limit: usize) -> Self {
        self.max_concurrent_lookups = Some(limit);
        self
    }

    /// Reject configurations the orchestrator cannot run with
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_concurrent_lookups == Some(0) {
            return Err(ValidationError::invalid_parameter(
                "enrichment.max_concurrent_lookups",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
