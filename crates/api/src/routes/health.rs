//! Liveness endpoint, mounted at the root beside the page and API routes.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Key read to check the cache answers; it is never written.
const CACHE_CHECK_KEY: &str = "health:check";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when every dependency answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub store_healthy: bool,
    pub cache_healthy: bool,
}

/// GET /health
///
/// Always 200; a failing dependency only degrades the reported status.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = state.faqs.store().health_check().await.is_ok();
    let cache_healthy = state.cache.get(CACHE_CHECK_KEY).await.is_ok();

    if !store_healthy || !cache_healthy {
        tracing::warn!(store_healthy, cache_healthy, "Health check degraded");
    }

    Json(HealthResponse {
        status: if store_healthy && cache_healthy {
            "ok"
        } else {
            "degraded"
        },
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
        cache_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
