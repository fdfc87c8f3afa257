use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use ticketdesk_core::error::CoreError;
use utoipa::ToSchema;

/// Message returned in place of internal error details.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ticketdesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// Stable machine-readable code, e.g. `UNAUTHORIZED`.
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::VersionDisabled(version) => {
                    tracing::debug!(%version, "Request for disabled API version");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "SERVICE_UNAVAILABLE",
                        "This API endpoint is not configured or is currently disabled.".to_string(),
                    )
                }
                CoreError::Validation(msg) => {
                    tracing::error!(error = %msg, "Ticket failed schema validation");
                    internal()
                }
            },

            // --- Store errors ---
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = ErrorBody {
            error: message,
            code: code.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// Every store failure is a 500 with a sanitized message. A stored
/// document that no longer decodes as a ticket is logged separately from
/// connectivity and write failures.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::ColumnDecode { index, source } => {
            tracing::error!(column = %index, error = %source, "Stored ticket failed schema validation");
        }
        other => {
            tracing::error!(error = %other, "Database error");
        }
    }
    internal()
}
