//! Generated OpenAPI document for the ticket endpoints.
//!
//! Only the versioned `/api` routes are described; `/` and `/health` are
//! operational and intentionally left out.

use axum::{routing::get, Json, Router};
use ticketdesk_core::ticket::{Ticket, TicketStatus, TicketTime};
use ticketdesk_core::version::ApiVersion;
use ticketdesk_db::models::ticket::StoredTicket;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::ErrorBody;
use crate::handlers;
use crate::state::AppState;

/// Name of the security scheme the ticket routes reference.
const API_KEY_SCHEME: &str = "api_key";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Case Study Ticket API",
        description = "Serves mock ticket data, generated on first request per API version and persisted thereafter."
    ),
    paths(
        handlers::tickets::list_tickets_v1,
        handlers::tickets::list_tickets_v2,
    ),
    components(schemas(StoredTicket, Ticket, TicketTime, TicketStatus, ApiVersion, ErrorBody)),
    modifiers(&ApiKeyHeader),
    tags((name = "Tickets", description = "Versioned ticket listings"))
)]
pub struct ApiDoc;

/// Registers the `X-API-KEY` header scheme.
struct ApiKeyHeader;

impl Modify for ApiKeyHeader {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                API_KEY_SCHEME,
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-API-KEY"))),
            );
        }
    }
}

/// GET /api-docs/openapi.json
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_only_ticket_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert_eq!(paths, vec!["/api/v1/tickets", "/api/v2/tickets"]);
    }

    #[test]
    fn document_declares_api_key_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        assert!(components.security_schemes.contains_key(API_KEY_SCHEME));
        assert!(components.schemas.contains_key("StoredTicket"));
    }
}
