//! Enrich command orchestrator
//!
//! Loads catalog files, runs them through one [`EnrichmentOrchestrator`] so
//! that every file shares the same store, and renders the results.

use crate::config::AppConfig;
use crate::output::{OutputFormat, create_formatter};
use anyhow::{Context, Result};
use colored::*;
use gametag_core::{
    EnrichmentOrchestrator, EnrichmentOutcome, EnrichmentStats, Entry, MetadataStore,
    SteamStoreProvider, StoreConfig, StoreFactory, TagProvider,
};
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while reading a catalog file
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog '{path}' is not a JSON array of entries: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Options for a single `enrich` invocation
#[derive(Debug, Clone)]
pub struct EnrichOptions {
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
    pub use_color: bool,
    pub show_stats: bool,
}

/// Orchestrator for the enrich command
pub struct EnrichCommandOrchestrator {
    enrichment: EnrichmentOrchestrator,
}

impl EnrichCommandOrchestrator {
    /// Create an orchestrator backed by the Steam store provider
    pub fn new(config: &AppConfig) -> Result<Self> {
        let store_config = if config.cache.enabled {
            StoreConfig::Shared
        } else {
            StoreConfig::NoOp
        };
        debug!("Using store backend: {store_config:?}");

        let provider = SteamStoreProvider::new(config.provider.clone())?;
        Self::with_components(
            StoreFactory::create(store_config),
            Arc::new(provider),
            config,
        )
    }

    /// Create an orchestrator with explicit store and provider
    pub fn with_components(
        store: Arc<dyn MetadataStore>,
        provider: Arc<dyn TagProvider>,
        config: &AppConfig,
    ) -> Result<Self> {
        let enrichment = EnrichmentOrchestrator::new(store, provider, config.enrichment.clone())?;
        Ok(Self { enrichment })
    }

    /// Read a catalog file into entries
    pub fn load_catalog(path: &Path) -> Result<Vec<Entry>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog '{}'", path.display()))?;

        let entries: Vec<Entry> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        debug!("Loaded {} entries from {}", entries.len(), path.display());
        Ok(entries)
    }

    /// Enrich one catalog file
    pub async fn enrich_file(&self, path: &Path) -> Result<EnrichmentOutcome> {
        let entries = Self::load_catalog(path)?;
        let outcome = self
            .enrichment
            .enrich_with_report(entries)
            .await
            .with_context(|| format!("Failed to enrich '{}'", path.display()))?;

        info!(
            "{}: {} candidates, {} cache hits, {} lookups ({} failed)",
            path.display(),
            outcome.stats.candidates,
            outcome.stats.cache_hits,
            outcome.stats.lookups,
            outcome.stats.lookups_failed
        );
        Ok(outcome)
    }

    /// Enrich every file in order and write the rendered catalogs to `out`
    pub async fn run<W: Write>(&self, options: &EnrichOptions, out: &mut W) -> Result<()> {
        let formatter = create_formatter(options.format, options.use_color);

        for path in &options.files {
            let outcome = self.enrich_file(path).await?;

            writeln!(out, "{}", formatter.format_catalog(&outcome.entries)?)?;

            if options.show_stats {
                eprintln!("{}", format_stats(path, &outcome.stats, options.use_color));
            }
        }

        out.flush()?;
        Ok(())
    }
}

/// Render per-file statistics for stderr
pub fn format_stats(path: &Path, stats: &EnrichmentStats, use_color: bool) -> String {
    let header = format!("{}:", path.display());
    let header = if use_color {
        header.bold().to_string()
    } else {
        header
    };

    let mut output = format!(
        "{header} candidates={} cache_hits={} lookups={} succeeded={} empty={} failed={} elapsed={:.2}s",
        stats.candidates,
        stats.cache_hits,
        stats.lookups,
        stats.lookups_succeeded,
        stats.empty_results,
        stats.lookups_failed,
        stats.elapsed.as_secs_f64()
    );

    if !stats.failed_ids.is_empty() {
        output.push_str(&format!(" failed_ids={}", stats.failed_ids.join(",")));
    }

    output
}
