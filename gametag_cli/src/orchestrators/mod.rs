//! Command orchestrators for business logic
//!
//! This module provides orchestrators that coordinate between the CLI layer
//! and the core library services.

pub mod enrich_orchestrator;

pub use enrich_orchestrator::{CatalogError, EnrichCommandOrchestrator, EnrichOptions};
