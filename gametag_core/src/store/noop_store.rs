//! No-operation store implementation
//!
//! Every lookup misses and every write is discarded, so each enrichment run
//! goes to the provider. Backs the `--no-cache` mode.

use crate::error::Result;
use crate::store::StoreStats;
use crate::store::traits::MetadataStore;
use crate::types::TagList;
use async_trait::async_trait;
use std::collections::HashMap;

/// A store that doesn't store anything
pub struct NoOpStore;

impl NoOpStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetadataStore for NoOpStore {
    async fn get_tags(&self, _ids: &[String]) -> Result<HashMap<String, TagList>> {
        Ok(HashMap::new())
    }

    async fn save_tags(&self, _data: HashMap<String, TagList>) -> Result<()> {
        Ok(())
    }

    async fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats::default())
    }
}

impl Default for NoOpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_store_never_hits() {
        let store = NoOpStore::new();
        store
            .save_tags(HashMap::from([("1".to_string(), vec!["Action".to_string()])]))
            .await
            .unwrap();

        let found = store.get_tags(&["1".to_string()]).await.unwrap();
        assert!(found.is_empty());
        assert_eq!(store.stats().await.unwrap(), StoreStats::default());
    }
}
