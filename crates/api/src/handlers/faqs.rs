//! Public JSON endpoints for FAQs.
//!
//! Every response carries text resolved for the `?lang=` code (default
//! `en`) through the translation cache.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use faqdesk_core::types::DbId;
use faqdesk_db::models::faq::{CreateFaq, UpdateFaq};

use crate::error::AppResult;
use crate::extract::{ApiPath, LangQuery, ValidatedJson};
use crate::state::AppState;

/// GET /faqs/?lang=
///
/// List all FAQs, newest first.
pub async fn list_faqs(
    State(state): State<AppState>,
    LangQuery(params): LangQuery,
) -> AppResult<impl IntoResponse> {
    let faqs = state.faqs.list_translated(params.code()).await?;
    Ok(Json(faqs))
}

/// POST /faqs/
///
/// Create an FAQ. `question` and `answer` are required; translations are
/// optional.
pub async fn create_faq(
    State(state): State<AppState>,
    LangQuery(params): LangQuery,
    ValidatedJson(input): ValidatedJson<CreateFaq>,
) -> AppResult<impl IntoResponse> {
    let faq = state.faqs.create(&input).await?;
    let body = state.faqs.translate(&faq, params.code()).await;
    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /faqs/{id}/?lang=
pub async fn get_faq(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    LangQuery(params): LangQuery,
) -> AppResult<impl IntoResponse> {
    let faq = state.faqs.get_translated(id, params.code()).await?;
    Ok(Json(faq))
}

/// PUT /faqs/{id}/
///
/// Replace every editable field. Omitted translations are cleared.
pub async fn replace_faq(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    LangQuery(params): LangQuery,
    ValidatedJson(input): ValidatedJson<CreateFaq>,
) -> AppResult<impl IntoResponse> {
    let faq = state.faqs.replace(id, &input).await?;
    Ok(Json(state.faqs.translate(&faq, params.code()).await))
}

/// PATCH /faqs/{id}/
///
/// Update only the provided fields.
pub async fn update_faq(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    LangQuery(params): LangQuery,
    ValidatedJson(input): ValidatedJson<UpdateFaq>,
) -> AppResult<impl IntoResponse> {
    let faq = state.faqs.update(id, &input).await?;
    Ok(Json(state.faqs.translate(&faq, params.code()).await))
}

/// DELETE /faqs/{id}/
pub async fn delete_faq(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    state.faqs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
