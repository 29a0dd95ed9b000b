//! Store trait definitions

use crate::error::Result;
use crate::store::StoreStats;
use crate::types::TagList;
use async_trait::async_trait;
use std::collections::HashMap;

/// Trait for metadata store implementations
///
/// Implementations must tolerate concurrent calls from several enrichment
/// runs; last write wins per key.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Look up stored tags for the given identifiers
    ///
    /// Identifiers with no stored value are omitted from the returned map.
    /// A stored empty list is returned as-is.
    async fn get_tags(&self, ids: &[String]) -> Result<HashMap<String, TagList>>;

    /// Insert or overwrite every pair in `data`
    ///
    /// Calling with an empty map is a no-op.
    async fn save_tags(&self, data: HashMap<String, TagList>) -> Result<()>;

    /// Get store statistics
    async fn stats(&self) -> Result<StoreStats>;
}
