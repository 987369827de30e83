//! [`CacheStore`] backed by the `cache_entries` table.
//!
//! Lets several server instances share translation and page caches through
//! the database they already use. Expired rows are invisible to reads and
//! overwritten by the next write; `purge_expired` removes them outright.

use std::time::Duration;

use async_trait::async_trait;
use faqdesk_core::cache::{CacheError, CacheStore, MAX_ENTRY_TTL};

use crate::repositories::CacheEntryRepo;
use crate::DbPool;

#[derive(Clone)]
pub struct PgCacheStore {
    pool: DbPool,
}

impl PgCacheStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn backend_error(err: sqlx::Error) -> CacheError {
    CacheError::Backend(err.to_string())
}

#[async_trait]
impl CacheStore for PgCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        CacheEntryRepo::get(&self.pool, key)
            .await
            .map_err(backend_error)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        let ttl_secs = ttl.min(MAX_ENTRY_TTL).as_secs_f64();
        CacheEntryRepo::upsert(&self.pool, key, &value, ttl_secs)
            .await
            .map_err(backend_error)
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        CacheEntryRepo::delete(&self.pool, key)
            .await
            .map(|_| ())
            .map_err(backend_error)
    }

    async fn clear(&self) -> Result<(), CacheError> {
        CacheEntryRepo::delete_all(&self.pool)
            .await
            .map(|_| ())
            .map_err(backend_error)
    }

    async fn purge_expired(&self) -> Result<u64, CacheError> {
        CacheEntryRepo::delete_expired(&self.pool)
            .await
            .map_err(backend_error)
    }
}
