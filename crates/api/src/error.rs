use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use faqdesk_core::error::CoreError;
use faqdesk_core::types::DbId;
use serde_json::json;

/// Error type returned by every handler.
///
/// Renders as `{"error": <message>, "code": <CODE>}` with a matching status.
/// Server-side failures are logged and replaced with a generic message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `faqdesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure surfaced by sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request payload failed field validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Malformed request (unparsable JSON, missing body fields, empty patch).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matched the request path.
    #[error("No route for {0}")]
    RouteNotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const GENERIC_INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// Shorthand for a missing FAQ.
    pub fn faq_not_found(id: DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity: "Faq", id })
    }

    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Core(CoreError::NotFound { .. }) | AppError::RouteNotFound(_) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
            AppError::Core(CoreError::Validation(_)) | AppError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Core(CoreError::Unauthorized(_)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            AppError::Core(CoreError::Forbidden(_)) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Database(sqlx::Error::RowNotFound) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Core(CoreError::Internal(_))
            | AppError::Database(_)
            | AppError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }

    /// Message safe to show a client.
    fn client_message(&self) -> String {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                format!("{entity} with id {id} not found")
            }
            AppError::Core(CoreError::Validation(msg))
            | AppError::Core(CoreError::Unauthorized(msg))
            | AppError::Core(CoreError::Forbidden(msg))
            | AppError::BadRequest(msg) => msg.clone(),
            AppError::Validation(errors) => errors.to_string(),
            AppError::RouteNotFound(path) => format!("No route for {path}"),
            AppError::Database(sqlx::Error::RowNotFound) => "Resource not found".to_string(),
            AppError::Core(CoreError::Internal(_))
            | AppError::Database(_)
            | AppError::InternalError(_) => GENERIC_INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = json!({
            "error": self.client_message(),
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
