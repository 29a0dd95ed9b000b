//! Enrichment orchestrator
//!
//! Runs one enrichment pass over a catalog: select candidates, read the
//! store, fetch misses concurrently, write successes back in one batch and
//! merge everything into the input order.

use crate::enrichment::EnrichmentConfig;
use crate::enrichment::selection::{candidate_ids, select_candidates};
use crate::error::{ProviderError, Result};
use crate::provider::TagProvider;
use crate::store::MetadataStore;
use crate::types::{Entry, TagList, TagResult};
use futures::future::join_all;
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// Counters for a single enrichment pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentStats {
    /// Entries inside the top-K cutoff
    pub candidates: usize,
    /// Distinct candidate identifiers answered by the store
    pub cache_hits: usize,
    /// Provider lookups issued
    pub lookups: usize,
    /// Lookups that returned a tag list (possibly empty)
    pub lookups_succeeded: usize,
    /// Successful lookups that returned no tags
    pub empty_results: usize,
    pub lookups_failed: usize,
    /// Identifiers whose lookup failed, in candidate order
    pub failed_ids: Vec<String>,
    pub elapsed: Duration,
}

/// Enriched entries plus the counters that produced them
#[derive(Debug, Clone)]
pub struct EnrichmentOutcome {
    pub entries: Vec<Entry>,
    /// Results written to the store during this pass, in candidate order
    pub fetched: Vec<TagResult>,
    pub stats: EnrichmentStats,
}

/// Coordinates the metadata store and a tag provider
pub struct EnrichmentOrchestrator {
    store: Arc<dyn MetadataStore>,
    provider: Arc<dyn TagProvider>,
    config: EnrichmentConfig,
    limiter: Option<Semaphore>,
}

impl EnrichmentOrchestrator {
    /// Create a new orchestrator
    ///
    /// Fails only if `config` is invalid.
    pub fn new(
        store: Arc<dyn MetadataStore>,
        provider: Arc<dyn TagProvider>,
        config: EnrichmentConfig,
    ) -> Result<Self> {
        config.validate()?;

        let limiter = config.max_concurrent_lookups.map(Semaphore::new);
        debug!(
            "Creating enrichment orchestrator: provider={}, top_k={}, max_concurrent={:?}",
            provider.name(),
            config.top_k,
            config.max_concurrent_lookups
        );

        Ok(Self {
            store,
            provider,
            config,
            limiter,
        })
    }

    pub fn config(&self) -> &EnrichmentConfig {
        &self.config
    }

    /// Enrich `entries`, returning them in their original order
    ///
    /// Individual lookup failures leave that entry's tags unset. Store
    /// failures abort the call.
    pub async fn enrich(&self, entries: Vec<Entry>) -> Result<Vec<Entry>> {
        Ok(self.enrich_with_report(entries).await?.entries)
    }

    /// Same as [`enrich`](Self::enrich) but also returns pass statistics
    pub async fn enrich_with_report(&self, entries: Vec<Entry>) -> Result<EnrichmentOutcome> {
        let start = Instant::now();
        let mut stats = EnrichmentStats::default();

        let ids = {
            let candidates = select_candidates(&entries, self.config.top_k);
            stats.candidates = candidates.len();
            candidate_ids(&candidates)
        };

        if ids.is_empty() {
            debug!("No enrichment candidates among {} entries", entries.len());
            stats.elapsed = start.elapsed();
            return Ok(EnrichmentOutcome {
                entries,
                fetched: Vec::new(),
                stats,
            });
        }

        let mut resolved = self.store.get_tags(&ids).await?;
        // Only candidate ids may come back from the store
        resolved.retain(|id, _| ids.contains(id));
        stats.cache_hits = resolved.len();

        let misses: Vec<&String> = ids.iter().filter(|id| !resolved.contains_key(*id)).collect();
        debug!(
            "Enrichment candidates: {} ids, {} cached, {} to fetch",
            ids.len(),
            stats.cache_hits,
            misses.len()
        );

        let fetched = self.fetch_missing(&misses).await;
        stats.lookups = fetched.len();

        let mut fetched_results = Vec::new();
        let mut new_tags: HashMap<String, TagList> = HashMap::new();
        for (id, outcome) in fetched {
            match outcome {
                Ok(tags) => {
                    trace!("Fetched {} tag(s) for {id}", tags.len());
                    stats.lookups_succeeded += 1;
                    if tags.is_empty() {
                        stats.empty_results += 1;
                    }
                    fetched_results.push(TagResult::new(id.clone(), tags.clone()));
                    new_tags.insert(id, tags);
                }
                Err(e) => {
                    warn!(
                        "Tag lookup via {} failed for {id} (transient: {}): {e}",
                        self.provider.name(),
                        e.is_transient()
                    );
                    stats.lookups_failed += 1;
                    stats.failed_ids.push(id);
                }
            }
        }

        if !new_tags.is_empty() {
            self.store.save_tags(new_tags.clone()).await?;
            resolved.extend(new_tags);
        }

        let entries = merge_tags(entries, &resolved);
        stats.elapsed = start.elapsed();
        debug!(
            "Enrichment finished in {:?}: {} hit(s), {} fetched, {} failed",
            stats.elapsed, stats.cache_hits, stats.lookups_succeeded, stats.lookups_failed
        );

        Ok(EnrichmentOutcome {
            entries,
            fetched: fetched_results,
            stats,
        })
    }

    /// Look up every id concurrently and wait for all of them
    async fn fetch_missing(
        &self,
        ids: &[&String],
    ) -> Vec<(String, std::result::Result<TagList, ProviderError>)> {
        let lookups = ids.iter().map(|id| async move {
            let _permit = match &self.limiter {
                Some(limiter) => limiter.acquire().await.ok(),
                None => None,
            };
            let outcome = self.provider.fetch_tags(id).await;
            ((*id).clone(), outcome)
        });

        join_all(lookups).await
    }
}

/// Apply resolved tags to every entry whose id has one, keeping input order
fn merge_tags(entries: Vec<Entry>, resolved: &HashMap<String, TagList>) -> Vec<Entry> {
    entries
        .into_iter()
        .map(|mut entry| {
            if let Some(tags) = resolved.get(&entry.id) {
                entry.tags = Some(tags.clone());
            }
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Provider answering from a fixed table; unknown ids fail
    struct TableProvider {
        table: HashMap<String, TagList>,
        calls: Mutex<Vec<String>>,
    }

    impl TableProvider {
        fn new(rows: &[(&str, &[&str])]) -> Self {
            Self {
                table: rows
                    .iter()
                    .map(|(id, tags)| (id.to_string(), tags.iter().map(|t| t.to_string()).collect()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TagProvider for TableProvider {
        async fn fetch_tags(&self, id: &str) -> std::result::Result<TagList, ProviderError> {
            self.calls.lock().unwrap().push(id.to_string());
            self.table
                .get(id)
                .cloned()
                .ok_or_else(|| ProviderError::http_status(id, 500))
        }

        fn name(&self) -> &str {
            "table"
        }
    }

    fn orchestrator(
        store: Arc<MemoryStore>,
        provider: Arc<TableProvider>,
        top_k: usize,
    ) -> EnrichmentOrchestrator {
        EnrichmentOrchestrator::new(
            store,
            provider,
            EnrichmentConfig::default().with_top_k(top_k),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_merge_keeps_input_order() {
        let store = Arc::new(MemoryStore::new());
        let provider = Arc::new(TableProvider::new(&[
            ("low", &["Casual"]),
            ("high", &["Action"]),
        ]));
        let orch = orchestrator(store, provider, 20);

        let entries = vec![
            Entry::new("low").with_playtime(1.0),
            Entry::new("high").with_playtime(100.0),
        ];
        let result = orch.enrich(entries).await.unwrap();

        assert_eq!(result[0].id, "low");
        assert_eq!(result[0].tags, Some(vec!["Casual".to_string()]));
        assert_eq!(result[1].id, "high");
        assert_eq!(result[1].tags, Some(vec!["Action".to_string()]));
    }

    #[tokio::test]
    async fn test_failed_lookup_leaves_tags_unset() {
        let store = Arc::new(MemoryStore::new());
        let provider = Arc::new(TableProvider::new(&[("ok", &["RPG"])]));
        let orch = orchestrator(store.clone(), provider, 20);

        let outcome = orch
            .enrich_with_report(vec![Entry::new("ok"), Entry::new("broken")])
            .await
            .unwrap();

        assert_eq!(outcome.entries[0].tags, Some(vec!["RPG".to_string()]));
        assert_eq!(outcome.entries[1].tags, None);
        assert_eq!(outcome.stats.lookups_failed, 1);
        assert_eq!(outcome.stats.failed_ids, vec!["broken"]);
        assert_eq!(outcome.fetched, vec![TagResult::new("ok", vec!["RPG".to_string()])]);

        let cached = store.get_tags(&["broken".to_string()]).await.unwrap();
        assert!(cached.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_ids_share_one_lookup() {
        let store = Arc::new(MemoryStore::new());
        let provider = Arc::new(TableProvider::new(&[("730", &["Action", "Free to Play"])]));
        let orch = orchestrator(store, provider.clone(), 20);

        let result = orch
            .enrich(vec![
                Entry::new("730").with_title("first copy"),
                Entry::new("730").with_title("second copy"),
            ])
            .await
            .unwrap();

        assert_eq!(provider.calls(), vec!["730"]);
        assert!(result.iter().all(|e| e.tags.as_ref().map(Vec::len) == Some(2)));
    }

    #[tokio::test]
    async fn test_zero_top_k_touches_nothing() {
        let store = Arc::new(MemoryStore::new());
        let provider = Arc::new(TableProvider::new(&[("1", &["Puzzle"])]));
        let orch = orchestrator(store.clone(), provider.clone(), 0);

        let entries = vec![Entry::new("1").with_playtime(5.0)];
        let result = orch.enrich(entries.clone()).await.unwrap();

        assert_eq!(result, entries);
        assert!(provider.calls().is_empty());
        let stats = store.stats().await.unwrap();
        assert_eq!(stats.hit_count + stats.miss_count, 0);
    }

    #[test]
    fn test_new_rejects_zero_concurrency() {
        let result = EnrichmentOrchestrator::new(
            Arc::new(MemoryStore::new()),
            Arc::new(TableProvider::new(&[])),
            EnrichmentConfig::default().with_max_concurrent_lookups(0),
        );
        assert!(result.is_err());
    }
}
