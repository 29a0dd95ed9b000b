//! Remote tag providers
//!
//! A provider answers one identifier at a time. The orchestrator fans lookups
//! out itself, so implementations should not batch or retry.

pub mod steam;

pub use steam::SteamStoreProvider;

use crate::error::{ProviderError, ValidationError};
use crate::types::TagList;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Trait for remote tag lookup implementations
#[async_trait]
pub trait TagProvider: Send + Sync {
    /// Fetch tags for a single identifier
    ///
    /// `Ok(vec![])` means the provider answered and had nothing to report;
    /// the orchestrator caches that. `Err` is never cached.
    async fn fetch_tags(&self, id: &str) -> Result<TagList, ProviderError>;

    /// Short name used in log lines
    fn name(&self) -> &str;
}

/// Configuration for HTTP tag providers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderConfig {
    /// Scheme and host of the store API, without trailing path
    pub base_url: String,
    /// Language code passed as `l=`
    pub language: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://store.steampowered.com".to_string(),
            language: "en".to_string(),
            timeout_seconds: 10,
            user_agent: concat!("gametag/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ProviderConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Reject configurations the provider cannot work with
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::invalid_parameter(
                "provider.base_url",
                "must not be empty",
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::invalid_parameter(
                "provider.base_url",
                "must start with http:// or https://",
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(ValidationError::invalid_parameter(
                "provider.timeout_seconds",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProviderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.user_agent.starts_with("gametag/"));
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let config = ProviderConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("provider.base_url"));
    }

    #[test]
    fn test_base_url_without_scheme_rejected() {
        let config = ProviderConfig {
            base_url: "store.steampowered.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ProviderConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
