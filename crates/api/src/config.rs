use faqdesk_core::cache::{CacheBackend, DEFAULT_MEMORY_CACHE_CAPACITY};
use faqdesk_core::translation::TRANSLATION_CACHE_TTL;

use crate::page_cache::PAGE_CACHE_TTL;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Postgres connection string. Without it FAQs live in process memory.
    pub database_url: Option<String>,
    /// Backend for the shared translation/page cache (default: `memory`).
    pub cache_backend: CacheBackend,
    /// Entry cap of the memory cache backend (default: `300`).
    pub memory_cache_capacity: usize,
    /// Lifetime of a cached per-record translation (default: `3600`).
    pub translation_cache_ttl_secs: u64,
    /// Lifetime of a cached rendered page (default: `900`).
    pub page_cache_ttl_secs: u64,
    /// Bearer token for `/admin` routes. Admin routes are disabled when unset.
    pub admin_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            cors_origins: vec!["http://localhost:5173".into()],
            request_timeout_secs: 30,
            database_url: None,
            cache_backend: CacheBackend::Memory,
            memory_cache_capacity: DEFAULT_MEMORY_CACHE_CAPACITY,
            translation_cache_ttl_secs: TRANSLATION_CACHE_TTL.as_secs(),
            page_cache_ttl_secs: PAGE_CACHE_TTL.as_secs(),
            admin_token: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                 |
    /// |------------------------------|-------------------------|
    /// | `HOST`                       | `0.0.0.0`               |
    /// | `PORT`                       | `3000`                  |
    /// | `CORS_ORIGINS`               | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`       | `30`                    |
    /// | `DATABASE_URL`               | unset (in-memory store) |
    /// | `CACHE_BACKEND`              | `memory`                |
    /// | `MEMORY_CACHE_CAPACITY`      | `300`                   |
    /// | `TRANSLATION_CACHE_TTL_SECS` | `3600`                  |
    /// | `PAGE_CACHE_TTL_SECS`        | `900`                   |
    /// | `ADMIN_TOKEN`                | unset (admin disabled)  |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = non_empty_var("DATABASE_URL");

        let cache_backend: CacheBackend = std::env::var("CACHE_BACKEND")
            .unwrap_or_else(|_| "memory".into())
            .parse()
            .unwrap_or_else(|e| panic!("CACHE_BACKEND is invalid: {e}"));

        let memory_cache_capacity: usize = std::env::var("MEMORY_CACHE_CAPACITY")
            .map(|v| v.parse().expect("MEMORY_CACHE_CAPACITY must be a valid usize"))
            .unwrap_or(defaults.memory_cache_capacity);
        assert!(
            memory_cache_capacity > 0,
            "MEMORY_CACHE_CAPACITY must be greater than zero"
        );

        let translation_cache_ttl_secs: u64 = std::env::var("TRANSLATION_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("TRANSLATION_CACHE_TTL_SECS must be a valid u64");

        let page_cache_ttl_secs: u64 = std::env::var("PAGE_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "900".into())
            .parse()
            .expect("PAGE_CACHE_TTL_SECS must be a valid u64");

        let admin_token = non_empty_var("ADMIN_TOKEN");

        if cache_backend == CacheBackend::Postgres && database_url.is_none() {
            panic!("CACHE_BACKEND=postgres requires DATABASE_URL");
        }

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            cache_backend,
            memory_cache_capacity,
            translation_cache_ttl_secs,
            page_cache_ttl_secs,
            admin_token,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
