//! Metadata store: identifier → tag list persistence
//!
//! The orchestrator only depends on the [`MetadataStore`] trait. The backing
//! implementation is chosen at startup through [`StoreFactory`].

pub mod factory;
pub mod memory_store;
pub mod noop_store;
pub mod traits;

pub use factory::{StoreConfig, StoreFactory};
pub use memory_store::MemoryStore;
pub use noop_store::NoOpStore;
pub use traits::MetadataStore;

/// Store statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub entry_count: usize,
    pub hit_count: u64,
    pub miss_count: u64,
    pub write_count: u64,
}

impl StoreStats {
    /// Fraction of looked-up identifiers that were present
    pub fn hit_rate(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            0.0
        } else {
            self.hit_count as f64 / total as f64
        }
    }
}
