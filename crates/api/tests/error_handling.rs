//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need a database --
//! they call `IntoResponse` directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use ticketdesk_api::error::AppError;
use ticketdesk_core::error::CoreError;
use ticketdesk_core::version::ApiVersion;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::Unauthorized maps to 401 with UNAUTHORIZED code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("bad key".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "bad key");
}

// ---------------------------------------------------------------------------
// Test: CoreError::VersionDisabled maps to 503
// ---------------------------------------------------------------------------

#[tokio::test]
async fn disabled_version_returns_503() {
    let err = AppError::Core(CoreError::VersionDisabled(ApiVersion::V2));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "SERVICE_UNAVAILABLE");
    assert_eq!(
        json["error"],
        "This API endpoint is not configured or is currently disabled."
    );
}

// ---------------------------------------------------------------------------
// Test: validation failures are server faults and are sanitized
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_sanitized_500() {
    let err = AppError::Core(CoreError::Validation(
        "ticket rejected: Resolved Date is earlier than Create Date".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json.to_string().contains("Resolved Date"));
}

// ---------------------------------------------------------------------------
// Test: store errors map to 500 without leaking details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_sanitized_500() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
