//! Handlers for the versioned ticket listings.
//!
//! Both versions share one code path; they differ only in which API key
//! they demand and how ticket timestamps are shaped, which is decided when
//! the batch is generated.

use axum::extract::State;
use axum::Json;
use ticketdesk_db::models::ticket::StoredTicket;

use crate::error::{AppResult, ErrorBody};
use crate::middleware::api_key::{RequireApiKey, VersionGate, V1, V2};
use crate::state::AppState;
use crate::ticket_store;

/// GET /api/v1/tickets
///
/// Tickets with calendar timestamps. Generated and stored on first call.
#[utoipa::path(
    get,
    path = "/api/v1/tickets",
    tag = "Tickets",
    summary = "Endpoint V1 for Tickets",
    responses(
        (status = 200, description = "Tickets with RFC 3339 timestamps", body = Vec<StoredTicket>),
        (status = 401, description = "Missing or wrong X-API-KEY", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    security(("api_key" = []))
)]
pub async fn list_tickets_v1(
    gate: RequireApiKey<V1>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StoredTicket>>> {
    list_tickets(gate, &state).await
}

/// GET /api/v2/tickets
///
/// Tickets with epoch-second timestamps. Answers 503 while `API_KEY_V2`
/// is unset.
#[utoipa::path(
    get,
    path = "/api/v2/tickets",
    tag = "Tickets",
    summary = "Endpoint V2 for Tickets",
    responses(
        (status = 200, description = "Tickets with epoch-second timestamps", body = Vec<StoredTicket>),
        (status = 401, description = "Missing or wrong X-API-KEY", body = ErrorBody),
        (status = 503, description = "V2 is not configured", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    security(("api_key" = []))
)]
pub async fn list_tickets_v2(
    gate: RequireApiKey<V2>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StoredTicket>>> {
    list_tickets(gate, &state).await
}

async fn list_tickets<V: VersionGate>(
    gate: RequireApiKey<V>,
    state: &AppState,
) -> AppResult<Json<Vec<StoredTicket>>> {
    let tickets = ticket_store::fetch_or_create(&state.pool, gate.version()).await?;
    Ok(Json(tickets))
}
