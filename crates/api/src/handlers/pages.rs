//! Server-rendered HTML pages.

use axum::extract::State;
use axum::http::{header, Uri};
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppResult;
use crate::extract::LangQuery;
use crate::page;
use crate::page_cache::PageCache;
use crate::state::AppState;

/// GET /?lang=
///
/// Render every FAQ for the requested language. The rendered page is
/// cached whole, keyed by the request URI.
pub async fn home(
    State(state): State<AppState>,
    LangQuery(params): LangQuery,
    uri: Uri,
) -> AppResult<Response> {
    let key = PageCache::cache_key(&uri);
    let max_age = format!("max-age={}", state.page_cache.ttl().as_secs());

    if let Some(body) = state.page_cache.get(&key).await {
        tracing::debug!(%key, "Serving cached page");
        return Ok(([(header::CACHE_CONTROL, max_age)], Html(body)).into_response());
    }

    let faqs = state.faqs.list_translated(params.code()).await?;
    let body = page::render_home(&faqs, params.code());
    state.page_cache.put(&key, &body).await;

    Ok(([(header::CACHE_CONTROL, max_age)], Html(body)).into_response())
}
