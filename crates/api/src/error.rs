use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use intake_db::StoreError;
use intake_mailer::EmailError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the store and notification errors and implements [`IntoResponse`]
/// to produce consistent JSON error responses. Malformed client input never
/// reaches this type; axum's `Json` extractor rejects it first with a 4xx.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The submission could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The admin notification could not be delivered.
    #[error(transparent)]
    Notify(#[from] EmailError),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Store(err) => {
                tracing::error!(error = %err, "Failed to store project submission");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "Failed to store project".to_string(),
                )
            }
            // The document may already be persisted when notification fails;
            // the client still gets an error (no rollback, no retry).
            ApiError::Notify(err) => {
                tracing::error!(error = %err, "Failed to send admin notification");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EMAIL_ERROR",
                    "Failed to send notification email".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
