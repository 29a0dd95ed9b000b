//! Memory-based store implementation
//!
//! Entries live for the lifetime of the process. There is no expiry and no
//! eviction.

use crate::error::Result;
use crate::store::StoreStats;
use crate::store::traits::MetadataStore;
use crate::types::TagList;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

static SHARED: Lazy<Arc<MemoryStore>> = Lazy::new(|| Arc::new(MemoryStore::new()));

/// In-memory store for tag lists
pub struct MemoryStore {
    entries: RwLock<HashMap<String, TagList>>,
    stats: RwLock<StoreStats>,
}

impl MemoryStore {
    /// Create a new, empty memory store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stats: RwLock::new(StoreStats::default()),
        }
    }

    /// Process-wide default instance
    ///
    /// Every call returns a handle to the same store. Tests should build their
    /// own with [`MemoryStore::new`].
    pub fn shared() -> Arc<MemoryStore> {
        SHARED.clone()
    }

    /// Number of stored identifiers
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Remove every entry and reset statistics
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        let mut stats = self.stats.write().await;

        entries.clear();
        *stats = StoreStats::default();
    }
}

#[async_trait]
impl MetadataStore for MemoryStore {
    async fn get_tags(&self, ids: &[String]) -> Result<HashMap<String, TagList>> {
        let entries = self.entries.read().await;

        let found: HashMap<String, TagList> = ids
            .iter()
            .filter_map(|id| entries.get(id).map(|tags| (id.clone(), tags.clone())))
            .collect();

        let mut stats = self.stats.write().await;
        stats.hit_count += found.len() as u64;
        stats.miss_count += ids.iter().filter(|id| !found.contains_key(*id)).count() as u64;

        Ok(found)
    }

    async fn save_tags(&self, data: HashMap<String, TagList>) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }

        let mut entries = self.entries.write().await;
        let mut stats = self.stats.write().await;

        stats.write_count += data.len() as u64;
        entries.extend(data);
        stats.entry_count = entries.len();

        Ok(())
    }

    async fn stats(&self) -> Result<StoreStats> {
        let stats = self.stats.read().await;
        Ok(stats.clone())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
