use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET /  -> home
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(pages::home))
}
