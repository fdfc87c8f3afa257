//! Per-version `X-API-KEY` extractor.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use ticketdesk_core::credentials::{check_credential, API_KEY_HEADER};
use ticketdesk_core::error::CoreError;
use ticketdesk_core::version::ApiVersion;

use crate::error::AppError;
use crate::state::AppState;

/// Type-level marker naming the API version a route belongs to.
pub trait VersionGate: 'static {
    const VERSION: ApiVersion;
}

/// Marker for `/api/v1` routes.
pub struct V1;

/// Marker for `/api/v2` routes.
pub struct V2;

impl VersionGate for V1 {
    const VERSION: ApiVersion = ApiVersion::V1;
}

impl VersionGate for V2 {
    const VERSION: ApiVersion = ApiVersion::V2;
}

/// Requires the `X-API-KEY` header to match the key configured for `V`.
///
/// Rejections:
/// - header missing or not valid UTF-8: 401
/// - no key configured for the version: 503, whatever was supplied
/// - key mismatch: 401
///
/// ```ignore
/// async fn v1_only(_: RequireApiKey<V1>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireApiKey<V>(PhantomData<fn() -> V>);

impl<V: VersionGate> RequireApiKey<V> {
    pub fn version(&self) -> ApiVersion {
        V::VERSION
    }
}

impl<V: VersionGate> FromRequestParts<AppState> for RequireApiKey<V> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let supplied = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing X-API-KEY header".into()))
            })?;

        let version = V::VERSION;
        let expected = state.config.api_keys.expected_for(version);
        check_credential(expected, supplied).map_err(|rejection| {
            tracing::debug!(%version, ?rejection, "API key rejected");
            AppError::Core(rejection.into_core_error(version))
        })?;

        Ok(RequireApiKey(PhantomData))
    }
}
