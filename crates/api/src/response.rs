//! Shared response envelope types for admin API handlers.
//!
//! Admin responses use a `{ "data": ... }` envelope. The public `/faqs`
//! endpoints return bare payloads.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
