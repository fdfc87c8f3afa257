#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use ticketdesk_api::config::{ApiKeys, ServerConfig, DEFAULT_DATABASE_URL};
use ticketdesk_api::router::build_app_router;
use ticketdesk_api::state::AppState;

/// API key configured for v1 in every test app.
pub const V1_KEY: &str = "abc123";

/// API key configured for v2 when a test enables it.
pub const V2_KEY: &str = "def456";

/// Build a test `ServerConfig` with safe defaults and the given v2 key.
pub fn test_config(v2_key: Option<&str>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: DEFAULT_DATABASE_URL.to_string(),
        db_max_connections: 5,
        api_keys: ApiKeys {
            v1: V1_KEY.to_string(),
            v2: v2_key.map(str::to_string),
        },
    }
}

/// Build the full application router, v1 and v2 both enabled.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config(Some(V2_KEY)))
}

/// Build the full application router with an explicit configuration.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request without credentials.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request carrying an `X-API-KEY` header.
pub async fn get_with_key(app: Router, uri: &str, key: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("X-API-KEY", key)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
