//! Shared key-value cache capability.
//!
//! The service caches two kinds of values: per-record translated field pairs
//! (JSON) and whole rendered pages (HTML). Both go through [`CacheStore`], an
//! object-safe trait injected into the application state so tests and
//! alternative backends can be swapped in without touching callers.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Errors raised by a cache backend.
///
/// Callers treat every variant as non-fatal: a failed read is a miss and a
/// failed write or delete is logged and skipped.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The backing store could not be reached or rejected the operation.
    #[error("Cache backend error: {0}")]
    Backend(String),

    /// A cached value could not be encoded or decoded.
    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value store with per-entry time-to-live.
///
/// Implementations give no atomicity across calls; concurrent writers to the
/// same key resolve as last-write-wins.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch a live (non-expired) value.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, replacing any previous entry, expiring
    /// after `ttl`.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;

    /// Remove `key`. Deleting a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Remove every entry.
    async fn clear(&self) -> Result<(), CacheError>;

    /// Drop entries whose TTL has passed. Returns how many were removed.
    async fn purge_expired(&self) -> Result<u64, CacheError>;
}

/// Which [`CacheStore`] implementation the server should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    /// Process-local LRU map; entries are lost on restart and not shared
    /// between server instances.
    Memory,
    /// `cache_entries` table in the service database.
    Postgres,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "locmem" => Ok(Self::Memory),
            "postgres" | "database" | "db" => Ok(Self::Postgres),
            other => Err(format!(
                "Unknown cache backend '{other}'. Expected 'memory' or 'postgres'"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

/// Default entry cap of [`MemoryCacheStore`].
pub const DEFAULT_MEMORY_CACHE_CAPACITY: usize = 300;

/// Longest lifetime any entry is given; larger TTLs are clamped to it.
pub const MAX_ENTRY_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl.min(MAX_ENTRY_TTL),
        }
    }

    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// Process-local [`CacheStore`] holding at most `capacity` entries.
///
/// When full, a write evicts the least recently used entry. Expired entries
/// are dropped when read; [`CacheStore::purge_expired`] sweeps them all.
pub struct MemoryCacheStore {
    entries: RwLock<LruCache<String, CacheEntry>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MEMORY_CACHE_CAPACITY)
    }

    /// A store capped at `capacity` entries. Zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    pub async fn capacity(&self) -> usize {
        self.entries.read().await.cap().get()
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryCacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCacheStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let live = match entries.get(key) {
            Some(entry) => entry.is_live(now).then(|| entry.value.clone()),
            None => return Ok(None),
        };
        if live.is_none() {
            entries.pop(key);
        }
        Ok(live)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        let entry = CacheEntry::new(value, ttl);
        let evicted = self.entries.write().await.push(key.to_string(), entry);
        if let Some((evicted_key, _)) = evicted.filter(|(k, _)| k != key) {
            tracing::trace!(key = %evicted_key, "Memory cache full, evicted entry");
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.write().await.pop(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CacheError> {
        self.entries.write().await.clear();
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, CacheError> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let expired: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| !entry.is_live(now))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            entries.pop(key);
        }
        Ok(expired.len() as u64)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
