//! In-process sentinel store, for tests and local dry runs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jubilee_core::error::{JubileeError, Result};
use jubilee_core::traits::SentinelStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// Sentinel store backed by a mutex-guarded map of key → expiry.
///
/// The claim check and the insert happen under one lock acquisition, which
/// gives the same set-if-absent atomicity as a real store primitive.
#[derive(Default)]
pub struct MemorySentinelStore {
    entries: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl MemorySentinelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries, mostly useful in tests.
    pub fn live_count(&self) -> usize {
        let now = Utc::now();
        self.entries
            .lock()
            .map(|m| m.values().filter(|exp| **exp > now).count())
            .unwrap_or(0)
    }
}

#[async_trait]
impl SentinelStore for MemorySentinelStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn try_claim(&self, key: &str, expires_at: DateTime<Utc>) -> Result<bool> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| JubileeError::store(e.to_string()))?;
        let now = Utc::now();
        if entries.get(key).is_some_and(|exp| *exp > now) {
            return Ok(false);
        }
        entries.insert(key.to_string(), expires_at);
        Ok(true)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| JubileeError::store(e.to_string()))?;
        Ok(entries.get(key).is_some_and(|exp| *exp > Utc::now()))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
