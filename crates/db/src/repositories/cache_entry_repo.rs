//! Repository for the `cache_entries` table backing [`crate::pg_cache::PgCacheStore`].

use sqlx::PgPool;

/// Provides key-value access to `cache_entries` with expiry.
pub struct CacheEntryRepo;

impl CacheEntryRepo {
    /// Fetch the value for `key` if it has not expired.
    pub async fn get(pool: &PgPool, key: &str) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT value FROM cache_entries WHERE key = $1 AND expires_at > NOW()",
        )
        .bind(key)
        .fetch_optional(pool)
        .await
    }

    /// Insert or replace `key`, expiring `ttl_secs` seconds from now.
    pub async fn upsert(
        pool: &PgPool,
        key: &str,
        value: &str,
        ttl_secs: f64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO cache_entries (key, value, expires_at) \
             VALUES ($1, $2, NOW() + make_interval(secs => $3)) \
             ON CONFLICT (key) DO UPDATE SET \
                 value = EXCLUDED.value, \
                 expires_at = EXCLUDED.expires_at",
        )
        .bind(key)
        .bind(value)
        .bind(ttl_secs)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete `key`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, key: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cache_entries WHERE key = $1")
            .bind(key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every entry. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cache_entries").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Delete entries whose expiry has passed. Returns the number removed.
    pub async fn delete_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cache_entries WHERE expires_at <= NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
