//! Store factory for creating different store implementations
//!
//! This module provides a factory for creating store instances based on
//! configuration.

use crate::store::traits::MetadataStore;
use crate::store::{memory_store::MemoryStore, noop_store::NoOpStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which store backs an enrichment run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreConfig {
    /// The process-wide shared memory store
    #[default]
    Shared,
    /// A fresh memory store owned by the caller
    Memory,
    /// No caching at all
    NoOp,
}

/// Factory for creating store implementations
pub struct StoreFactory;

impl StoreFactory {
    /// Create a store implementation based on configuration
    pub fn create(config: StoreConfig) -> Arc<dyn MetadataStore> {
        match config {
            StoreConfig::Shared => MemoryStore::shared(),
            StoreConfig::Memory => Arc::new(MemoryStore::new()),
            StoreConfig::NoOp => Arc::new(NoOpStore::new()),
        }
    }

    /// Create the process-wide shared store
    pub fn shared() -> Arc<dyn MetadataStore> {
        Self::create(StoreConfig::Shared)
    }

    /// Create an isolated memory store
    pub fn memory() -> Arc<dyn MetadataStore> {
        Self::create(StoreConfig::Memory)
    }

    /// Create a no-op store
    pub fn noop() -> Arc<dyn MetadataStore> {
        Self::create(StoreConfig::NoOp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_memory_stores_are_isolated() {
        let first = StoreFactory::memory();
        let second = StoreFactory::memory();

        first
            .save_tags(HashMap::from([("1".to_string(), vec!["RPG".to_string()])]))
            .await
            .unwrap();

        assert!(second.get_tags(&["1".to_string()]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_noop_store_discards_writes() {
        let store = StoreFactory::noop();
        store
            .save_tags(HashMap::from([("1".to_string(), vec!["RPG".to_string()])]))
            .await
            .unwrap();

        assert!(store.get_tags(&["1".to_string()]).await.unwrap().is_empty());
    }

    #[test]
    fn test_store_config_parses_lowercase() {
        let config: StoreConfig = serde_json::from_str("\"noop\"").unwrap();
        assert_eq!(config, StoreConfig::NoOp);
        assert_eq!(StoreConfig::default(), StoreConfig::Shared);
    }
}
