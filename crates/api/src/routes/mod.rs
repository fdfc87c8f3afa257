pub mod docs;
pub mod health;
pub mod root;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /v1/tickets          list tickets, calendar timestamps (X-API-KEY: API_KEY_V1)
/// /v2/tickets          list tickets, epoch timestamps    (X-API-KEY: API_KEY_V2)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/tickets", get(handlers::tickets::list_tickets_v1))
        .route("/v2/tickets", get(handlers::tickets::list_tickets_v2))
}
