pub mod admin;
pub mod faqs;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (health is mounted separately).
///
/// Route hierarchy:
///
/// ```text
/// /                          rendered FAQ page (GET, ?lang=)
///
/// /faqs, /faqs/              list (GET, ?lang=), create (POST)
/// /faqs/{id}, /faqs/{id}/    get (GET, ?lang=), replace (PUT),
///                            update (PATCH), delete (DELETE)
///
/// /admin/faqs                list (GET, ?search=), create (POST)
/// /admin/faqs/{id}           get, update (PUT), delete
/// /admin/cache/clear         drop all cached translations and pages (POST)
/// /admin/cache/purge         drop expired cache entries (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(faqs::router())
        .nest("/admin", admin::router())
}
