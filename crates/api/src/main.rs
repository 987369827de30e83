use std::net::SocketAddr;
use std::sync::Arc;

use faqdesk_core::cache::{CacheBackend, CacheStore, MemoryCacheStore};
use faqdesk_db::pg_cache::PgCacheStore;
use faqdesk_db::store::{FaqStore, MemoryFaqStore, PgFaqStore};
use faqdesk_db::DbPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faqdesk_api::config::ServerConfig;
use faqdesk_api::router::build_app_router;
use faqdesk_api::state::AppState;

const DEFAULT_LOG_FILTER: &str = "faqdesk_api=debug,faqdesk_core=info,faqdesk_db=info,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(
        cache_backend = ?config.cache_backend,
        memory_cache_capacity = config.memory_cache_capacity,
        translation_ttl_secs = config.translation_cache_ttl_secs,
        page_ttl_secs = config.page_cache_ttl_secs,
        admin_enabled = config.admin_token.is_some(),
        "Loaded server configuration"
    );

    let pool = match &config.database_url {
        Some(url) => Some(connect_database(url).await),
        None => {
            tracing::warn!("DATABASE_URL not set, FAQs will be kept in memory only");
            None
        }
    };
    let (store, cache) = build_backends(&config, pool);

    let state = AppState::new(store, cache, config.clone());
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "FAQ service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Connect, verify and migrate the FAQ database. Any failure aborts startup.
async fn connect_database(url: &str) -> DbPool {
    let pool = faqdesk_db::create_pool(url)
        .await
        .expect("Failed to connect to database");
    faqdesk_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    faqdesk_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready, migrations applied");
    pool
}

/// Pick the FAQ store and cache implementations for this process.
///
/// `ServerConfig::from_env` rejects a postgres cache without a database, so
/// the memory cache is the only fallback needed.
fn build_backends(
    config: &ServerConfig,
    pool: Option<DbPool>,
) -> (Arc<dyn FaqStore>, Arc<dyn CacheStore>) {
    let cache: Arc<dyn CacheStore> = match (config.cache_backend, &pool) {
        (CacheBackend::Postgres, Some(pool)) => Arc::new(PgCacheStore::new(pool.clone())),
        _ => Arc::new(MemoryCacheStore::with_capacity(config.memory_cache_capacity)),
    };

    let store: Arc<dyn FaqStore> = match pool {
        Some(pool) => Arc::new(PgFaqStore::new(pool)),
        None => Arc::new(MemoryFaqStore::new()),
    };

    (store, cache)
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
