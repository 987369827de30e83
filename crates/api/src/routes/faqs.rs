//! Route definitions for the public FAQ API.
//!
//! Both the bare and trailing-slash forms of each path are served.

use axum::routing::get;
use axum::Router;

use crate::handlers::faqs;
use crate::state::AppState;

/// ```text
/// GET    /faqs/        -> list_faqs
/// POST   /faqs/        -> create_faq
/// GET    /faqs/{id}/   -> get_faq
/// PUT    /faqs/{id}/   -> replace_faq
/// PATCH  /faqs/{id}/   -> update_faq
/// DELETE /faqs/{id}/   -> delete_faq
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(faqs::list_faqs).post(faqs::create_faq);
    let item = get(faqs::get_faq)
        .put(faqs::replace_faq)
        .patch(faqs::update_faq)
        .delete(faqs::delete_faq);

    Router::new()
        .route("/faqs", collection.clone())
        .route("/faqs/", collection)
        .route("/faqs/{id}", item.clone())
        .route("/faqs/{id}/", item)
}
