//! Instrumented MetadataStore implementations for testing

use async_trait::async_trait;
use gametag_core::error::{Result, StoreError};
use gametag_core::store::{MemoryStore, MetadataStore, StoreStats};
use gametag_core::TagList;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One call made against a [`RecordingStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    /// Identifiers passed to `get_tags`, in call order
    Get(Vec<String>),
    /// Keys passed to `save_tags`, sorted
    Save(Vec<String>),
}

/// A memory store that records every call made against it
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: Arc<MemoryStore>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `rows`
    pub async fn seeded(rows: &[(&str, &[&str])]) -> Self {
        let store = Self::new();
        let data = rows
            .iter()
            .map(|(id, tags)| (id.to_string(), tags.iter().map(|t| t.to_string()).collect()))
            .collect();
        store.inner.save_tags(data).await.unwrap();
        store
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Every identifier the store was asked about or written with
    pub fn touched_ids(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .flat_map(|call| match call {
                StoreCall::Get(ids) | StoreCall::Save(ids) => ids,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Snapshot of everything currently stored under `ids`
    pub async fn snapshot(&self, ids: &[&str]) -> HashMap<String, TagList> {
        let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        self.inner.get_tags(&ids).await.unwrap()
    }

    pub async fn len(&self) -> usize {
        self.inner.len().await
    }
}

#[async_trait]
impl MetadataStore for RecordingStore {
    async fn get_tags(&self, ids: &[String]) -> Result<HashMap<String, TagList>> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Get(ids.to_vec()));
        self.inner.get_tags(ids).await
    }

    async fn save_tags(&self, data: HashMap<String, TagList>) -> Result<()> {
        let mut keys: Vec<String> = data.keys().cloned().collect();
        keys.sort();
        self.calls.lock().unwrap().push(StoreCall::Save(keys));
        self.inner.save_tags(data).await
    }

    async fn stats(&self) -> Result<StoreStats> {
        self.inner.stats().await
    }
}

/// A store whose reads and/or writes fail
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore {
    fail_get: bool,
    fail_save: bool,
}

impl FailingStore {
    /// Every `get_tags` call fails
    pub fn failing_get() -> Self {
        Self {
            fail_get: true,
            fail_save: false,
        }
    }

    /// Reads succeed with nothing found; every `save_tags` call fails
    pub fn failing_save() -> Self {
        Self {
            fail_get: false,
            fail_save: true,
        }
    }
}

#[async_trait]
impl MetadataStore for FailingStore {
    async fn get_tags(&self, _ids: &[String]) -> Result<HashMap<String, TagList>> {
        if self.fail_get {
            return Err(StoreError::unavailable("failing", "read refused").into());
        }
        Ok(HashMap::new())
    }

    async fn save_tags(&self, _data: HashMap<String, TagList>) -> Result<()> {
        if self.fail_save {
            return Err(StoreError::unavailable("failing", "write refused").into());
        }
        Ok(())
    }

    async fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats::default())
    }
}
