//! Lazy per-version ticket batches.
//!
//! The first request for a version that finds nothing stored generates a
//! batch of mock tickets, persists it in one write and returns it. Every
//! later request gets the stored batch back unchanged, provided each stored
//! document still passes the ticket schema check.

use ticketdesk_core::mock;
use ticketdesk_core::ticket::Ticket;
use ticketdesk_core::version::ApiVersion;
use ticketdesk_db::models::ticket::{BatchOutcome, StoredTicket};
use ticketdesk_db::repositories::TicketRepo;
use ticketdesk_db::DbPool;

use crate::error::{AppError, AppResult};

/// Return the stored tickets for `version`, generating and persisting a
/// batch of 100 to 120 first if there are none.
pub async fn fetch_or_create(pool: &DbPool, version: ApiVersion) -> AppResult<Vec<StoredTicket>> {
    let outcome = TicketRepo::find_or_insert_batch(pool, version, move || {
        tracing::info!(%version, "No tickets stored for version, generating a batch");
        let batch = mock::generate_batch(version);
        validate_batch(&batch)?;
        Ok::<_, AppError>(batch)
    })
    .await?;

    match &outcome {
        BatchOutcome::Existing(tickets) => {
            validate_stored(tickets)?;
            tracing::info!(%version, count = tickets.len(), "Returning stored tickets");
        }
        BatchOutcome::Created(tickets) => {
            tracing::info!(%version, count = tickets.len(), "Saved new ticket batch");
        }
    }

    Ok(outcome.into_tickets())
}

/// Reject the whole batch if any ticket breaks the schema.
fn validate_batch(batch: &[Ticket]) -> AppResult<()> {
    for ticket in batch {
        ticket.check()?;
    }
    Ok(())
}

/// Same check for documents read back from the store. Well-typed JSON can
/// still break the ticket rules.
fn validate_stored(tickets: &[StoredTicket]) -> AppResult<()> {
    for stored in tickets {
        if let Err(err) = stored.document.check() {
            tracing::warn!(id = stored.id, "Stored ticket failed schema check");
            return Err(err.into());
        }
    }
    Ok(())
}
