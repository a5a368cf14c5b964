//! Best-effort persistence capability for the ledger.
//!
//! The ledger only ever talks to a [`LedgerStore`]. A snapshot is written as two
//! key-value pairs, `donations` and `stats`, each holding a JSON document. Stores may
//! fail at any time; the ledger treats every error as "persistence unavailable".

use crate::{
    core::{donation::DonationRecord, stats::AggregateStats},
    errors::{Error, Result},
};
use std::{
    collections::HashMap,
    future::Future,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

/// Key holding the JSON array of donation records.
pub const DONATIONS_KEY: &str = "donations";

/// Key holding the JSON aggregate stats object.
pub const STATS_KEY: &str = "stats";

/// Everything the ledger persists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LedgerSnapshot {
    /// Records in insertion order
    pub donations: Vec<DonationRecord>,
    /// Aggregates computed over `donations`
    pub stats: AggregateStats,
}

impl LedgerSnapshot {
    /// Encodes the snapshot as `(key, json)` pairs.
    pub fn encode(&self) -> Result<[(&'static str, String); 2]> {
        Ok([
            (DONATIONS_KEY, serde_json::to_string(&self.donations)?),
            (STATS_KEY, serde_json::to_string(&self.stats)?),
        ])
    }

    /// Decodes a snapshot from the stored JSON values.
    pub fn decode(donations: &str, stats: &str) -> Result<Self> {
        Ok(Self {
            donations: serde_json::from_str(donations)?,
            stats: serde_json::from_str(stats)?,
        })
    }
}

/// Storage capability injected into the ledger.
pub trait LedgerStore: Send + Sync {
    /// Reads the last saved snapshot, or `None` if nothing has been saved.
    fn load(&self) -> impl Future<Output = Result<Option<LedgerSnapshot>>> + Send;

    /// Overwrites the stored snapshot.
    fn save(&self, snapshot: &LedgerSnapshot) -> impl Future<Output = Result<()>> + Send;
}

/// In-process key-value store.
///
/// Useful when no database is configured and in tests. It can be switched off to
/// behave like disabled or sandboxed storage.
#[derive(Debug)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    available: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates an empty, available store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Creates a store that rejects every operation.
    #[must_use]
    pub fn unavailable() -> Self {
        let store = Self::new();
        store.set_available(false);
        store
    }

    /// Turns the store on or off.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Returns the raw JSON stored under `key`.
    pub fn raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(Error::PersistenceUnavailable {
                message: "memory store is disabled".to_string(),
            });
        }
        self.entries.lock().map_err(|e| Error::PersistenceUnavailable {
            message: format!("memory store lock poisoned: {e}"),
        })
    }
}

impl LedgerStore for MemoryStore {
    async fn load(&self) -> Result<Option<LedgerSnapshot>> {
        let entries = self.entries()?;
        match (entries.get(DONATIONS_KEY), entries.get(STATS_KEY)) {
            (Some(donations), Some(stats)) => LedgerSnapshot::decode(donations, stats).map(Some),
            _ => Ok(None),
        }
    }

    async fn save(&self, snapshot: &LedgerSnapshot) -> Result<()> {
        let encoded = snapshot.encode()?;
        let mut entries = self.entries()?;
        for (key, value) in encoded {
            entries.insert(key.to_string(), value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::donation::DonationRequest;
    use chrono::Utc;

    fn sample_snapshot() -> LedgerSnapshot {
        let record = DonationRecord::from_request(
            1,
            DonationRequest::new(12.0).with_contributor("Sam"),
            Utc::now(),
        );
        LedgerSnapshot {
            stats: crate::core::stats::compute_stats(std::slice::from_ref(&record), Utc::now()),
            donations: vec![record],
        }
    }

    #[tokio::test]
    async fn test_memory_store_load_empty() -> Result<()> {
        let store = MemoryStore::new();
        assert!(store.load().await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_memory_store_save_then_load() -> Result<()> {
        let store = MemoryStore::new();
        let snapshot = sample_snapshot();

        store.save(&snapshot).await?;

        assert_eq!(store.load().await?, Some(snapshot));
        Ok(())
    }

    #[tokio::test]
    async fn test_memory_store_uses_two_keys() -> Result<()> {
        let store = MemoryStore::new();
        store.save(&LedgerSnapshot::default()).await?;

        assert_eq!(store.raw(DONATIONS_KEY)?.as_deref(), Some("[]"));
        let stats = store.raw(STATS_KEY)?.unwrap();
        assert!(stats.contains("\"totalRaised\":0.0"));
        assert!(stats.contains("\"contributors\":0"));
        Ok(())
    }

    #[tokio::test]
    async fn test_unavailable_store_rejects_everything() {
        let store = MemoryStore::unavailable();

        assert!(matches!(
            store.save(&LedgerSnapshot::default()).await,
            Err(Error::PersistenceUnavailable { .. })
        ));
        assert!(matches!(
            store.load().await,
            Err(Error::PersistenceUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_store_can_come_back() -> Result<()> {
        let store = MemoryStore::unavailable();
        store.set_available(true);

        store.save(&LedgerSnapshot::default()).await?;
        assert!(store.load().await?.is_some());
        Ok(())
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            LedgerSnapshot::decode("not json", "{}"),
            Err(Error::Serialization(_))
        ));
    }
}
