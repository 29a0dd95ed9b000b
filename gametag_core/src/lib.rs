//! gametag core library
//!
//! Enriches game catalog entries with tags from a remote provider, using a
//! write-through metadata store so each identifier is fetched at most once
//! per store lifetime.

pub mod enrichment;
pub mod error;
pub mod provider;
pub mod store;
pub mod types;

// Re-export main types
pub use enrichment::{
    DEFAULT_TOP_K, EnrichmentConfig, EnrichmentOrchestrator, EnrichmentOutcome, EnrichmentStats,
};
pub use error::{Error, Result};
pub use provider::{ProviderConfig, SteamStoreProvider, TagProvider};
pub use store::{MemoryStore, MetadataStore, NoOpStore, StoreConfig, StoreFactory, StoreStats};
pub use types::{Entry, TagList, TagResult};
