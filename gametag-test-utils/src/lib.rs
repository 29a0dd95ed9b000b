//! Test utilities for gametag
//!
//! This crate provides mock providers, instrumented stores and catalog
//! builders for testing enrichment.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::{CatalogBuilder, ranked_catalog};
pub use mocks::{FailingStore, MockTagProvider, RecordingStore, StoreCall};
