use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of the unauthenticated welcome route.
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET / -- confirms the service is up. Not part of the API document.
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Ticket API. See /api-docs/openapi.json for documentation.",
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}
