use std::sync::Arc;
use std::time::Duration;

use faqdesk_core::cache::CacheStore;
use faqdesk_core::translation::TranslationCache;
use faqdesk_db::store::FaqStore;

use crate::config::ServerConfig;
use crate::page_cache::PageCache;
use crate::service::FaqService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// FAQ reads and writes, with translation caching.
    pub faqs: FaqService,
    /// Whole-page cache for the rendered home page.
    pub page_cache: PageCache,
    /// The shared cache both layers write to.
    pub cache: Arc<dyn CacheStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire a store and a cache backend together using the TTLs in `config`.
    pub fn new(store: Arc<dyn FaqStore>, cache: Arc<dyn CacheStore>, config: ServerConfig) -> Self {
        let translations = TranslationCache::with_ttl(
            Arc::clone(&cache),
            Duration::from_secs(config.translation_cache_ttl_secs),
        );
        let page_cache = PageCache::new(
            Arc::clone(&cache),
            Duration::from_secs(config.page_cache_ttl_secs),
        );

        Self {
            faqs: FaqService::new(store, translations),
            page_cache,
            cache,
            config: Arc::new(config),
        }
    }
}
