//! Persisted ticket documents.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ticketdesk_core::ticket::Ticket;
use ticketdesk_core::types::DbId;
use utoipa::ToSchema;

/// A row from the `tickets` table.
///
/// Serializes as the ticket document with the row id merged in as `_id`.
/// Decoding fails (as a column decode error) if the stored document is not
/// a well-typed [`Ticket`]. Field rules are checked by [`Ticket::check`].
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct StoredTicket {
    #[serde(rename = "_id")]
    #[schema(value_type = i64)]
    pub id: DbId,
    #[sqlx(json)]
    #[serde(flatten)]
    pub document: Ticket,
}

/// Whether [`TicketRepo::find_or_insert_batch`](crate::repositories::TicketRepo::find_or_insert_batch)
/// found an existing batch or had to create one.
#[derive(Debug)]
pub enum BatchOutcome {
    Existing(Vec<StoredTicket>),
    Created(Vec<StoredTicket>),
}

impl BatchOutcome {
    pub fn was_created(&self) -> bool {
        matches!(self, BatchOutcome::Created(_))
    }

    pub fn into_tickets(self) -> Vec<StoredTicket> {
        match self {
            BatchOutcome::Existing(tickets) | BatchOutcome::Created(tickets) => tickets,
        }
    }
}
