//! Admin endpoints for direct editing of every FAQ field.
//!
//! Responses expose raw records (all languages) inside a `{ "data": ... }`
//! envelope. All routes require [`RequireAdmin`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use faqdesk_core::types::DbId;
use faqdesk_db::models::faq::{CreateFaq, UpdateFaq};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::middleware::admin::RequireAdmin;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/faqs?search=
///
/// List raw FAQs, newest first, optionally filtered by a case-insensitive
/// search over every question and answer field.
pub async fn list_faqs(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let faqs = state.faqs.list(params.term()).await?;
    Ok(Json(DataResponse { data: faqs }))
}

/// POST /admin/faqs
pub async fn create_faq(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateFaq>,
) -> AppResult<impl IntoResponse> {
    let faq = state.faqs.create(&input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: faq })))
}

/// GET /admin/faqs/{id}
pub async fn get_faq(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let faq = state.faqs.get(id).await?;
    Ok(Json(DataResponse { data: faq }))
}

/// PUT /admin/faqs/{id}
///
/// Partially update any field, in any language.
pub async fn update_faq(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateFaq>,
) -> AppResult<impl IntoResponse> {
    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }
    let faq = state.faqs.update(id, &input).await?;
    Ok(Json(DataResponse { data: faq }))
}

/// DELETE /admin/faqs/{id}
pub async fn delete_faq(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    state.faqs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct CacheClearResult {
    pub cleared: bool,
}

/// POST /admin/cache/clear
///
/// Drop every cached translation and page.
pub async fn clear_cache(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    state
        .cache
        .clear()
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!("Cache cleared by admin");

    Ok(Json(DataResponse {
        data: CacheClearResult { cleared: true },
    }))
}

#[derive(Debug, Serialize)]
pub struct CachePurgeResult {
    pub purged: u64,
}

/// POST /admin/cache/purge
///
/// Drop only entries whose TTL has passed. Live entries are kept.
pub async fn purge_expired_cache(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let purged = state
        .cache
        .purge_expired()
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(purged, "Expired cache entries purged by admin");

    Ok(Json(DataResponse {
        data: CachePurgeResult { purged },
    }))
}
