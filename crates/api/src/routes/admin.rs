//! Route definitions for the admin surface, mounted at `/admin`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// ```text
/// GET    /faqs          -> list_faqs
/// POST   /faqs          -> create_faq
/// GET    /faqs/{id}     -> get_faq
/// PUT    /faqs/{id}     -> update_faq
/// DELETE /faqs/{id}     -> delete_faq
/// POST   /cache/clear   -> clear_cache
/// POST   /cache/purge   -> purge_expired_cache
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/faqs", get(admin::list_faqs).post(admin::create_faq))
        .route(
            "/faqs/{id}",
            get(admin::get_faq)
                .put(admin::update_faq)
                .delete(admin::delete_faq),
        )
        .route("/cache/clear", post(admin::clear_cache))
        .route("/cache/purge", post(admin::purge_expired_cache))
}
