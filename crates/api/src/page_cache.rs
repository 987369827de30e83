//! Whole-response cache for rendered HTML pages.
//!
//! Sits above the per-record translation cache and is not invalidated by
//! writes: a cached page is served until its TTL runs out.

use std::sync::Arc;
use std::time::Duration;

use axum::http::Uri;
use faqdesk_core::cache::CacheStore;

/// Default lifetime of a cached page.
pub const PAGE_CACHE_TTL: Duration = Duration::from_secs(900);

#[derive(Clone)]
pub struct PageCache {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl PageCache {
    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cache key for a request: path plus the raw query string.
    pub fn cache_key(uri: &Uri) -> String {
        let target = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());
        format!("page:{target}")
    }

    /// Cached body for `key`. Backend failures count as a miss.
    pub async fn get(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(hit) => hit,
            Err(e) => {
                tracing::warn!(key, error = %e, "Page cache read failed");
                None
            }
        }
    }

    pub async fn put(&self, key: &str, body: &str) {
        if let Err(e) = self.store.set(key, body.to_owned(), self.ttl).await {
            tracing::warn!(key, error = %e, "Page cache write failed");
        }
    }
}
