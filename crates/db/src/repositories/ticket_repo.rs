//! Repository for the `tickets` table.
//!
//! Tickets are written once per version, as a single batch, and are read
//! back by version tag in insertion order.

use sqlx::{PgExecutor, PgPool};
use ticketdesk_core::ticket::Ticket;
use ticketdesk_core::version::ApiVersion;

use crate::models::ticket::{BatchOutcome, StoredTicket};

/// Column list for `tickets` queries.
const COLUMNS: &str = "id, document";

/// Prefix for the per-version advisory lock key.
const BATCH_LOCK_PREFIX: &str = "tickets:batch:";

/// Provides data access for ticket documents.
pub struct TicketRepo;

impl TicketRepo {
    /// List every ticket tagged with `version`, oldest first.
    pub async fn list_by_version<'e>(
        executor: impl PgExecutor<'e>,
        version: ApiVersion,
    ) -> Result<Vec<StoredTicket>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tickets WHERE endpoint_version = $1 ORDER BY id"
        );
        sqlx::query_as::<_, StoredTicket>(&query)
            .bind(version.as_str())
            .fetch_all(executor)
            .await
    }

    /// Return up to `limit` tickets for `version`, oldest first.
    pub async fn sample_by_version(
        pool: &PgPool,
        version: ApiVersion,
        limit: i64,
    ) -> Result<Vec<StoredTicket>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tickets WHERE endpoint_version = $1 ORDER BY id LIMIT $2"
        );
        sqlx::query_as::<_, StoredTicket>(&query)
            .bind(version.as_str())
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Count the tickets stored for `version`.
    pub async fn count_by_version(pool: &PgPool, version: ApiVersion) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tickets WHERE endpoint_version = $1")
            .bind(version.as_str())
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Insert a batch of tickets with a single statement.
    ///
    /// Each row's version tag is taken from the ticket itself. Returns the
    /// stored rows ordered by id, i.e. in the order they were given.
    pub async fn insert_batch<'e>(
        executor: impl PgExecutor<'e>,
        tickets: &[Ticket],
    ) -> Result<Vec<StoredTicket>, sqlx::Error> {
        if tickets.is_empty() {
            return Ok(Vec::new());
        }

        let versions: Vec<String> = tickets
            .iter()
            .map(|t| t.endpoint_version.as_str().to_string())
            .collect();
        let documents: Vec<serde_json::Value> = tickets
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<_, _>>()
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let query = format!(
            "INSERT INTO tickets (endpoint_version, document) \
             SELECT * FROM UNNEST($1::text[], $2::jsonb[]) \
             RETURNING {COLUMNS}"
        );
        let mut stored = sqlx::query_as::<_, StoredTicket>(&query)
            .bind(&versions)
            .bind(&documents)
            .fetch_all(executor)
            .await?;
        stored.sort_by_key(|t| t.id);
        Ok(stored)
    }

    /// Return the stored batch for `version`, creating it first if none
    /// exists.
    ///
    /// The check and the insert run in one transaction holding a
    /// per-version advisory lock, so concurrent first requests for the same
    /// version see exactly one batch. `make_batch` is only called when the
    /// version has no tickets; if it fails, nothing is written.
    pub async fn find_or_insert_batch<F, E>(
        pool: &PgPool,
        version: ApiVersion,
        make_batch: F,
    ) -> Result<BatchOutcome, E>
    where
        F: FnOnce() -> Result<Vec<Ticket>, E> + Send,
        E: From<sqlx::Error>,
    {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(format!("{BATCH_LOCK_PREFIX}{version}"))
            .execute(&mut *tx)
            .await?;

        let existing = Self::list_by_version(&mut *tx, version).await?;
        if !existing.is_empty() {
            tx.commit().await?;
            tracing::debug!(%version, count = existing.len(), "Found existing ticket batch");
            return Ok(BatchOutcome::Existing(existing));
        }

        let batch = make_batch()?;
        let created = Self::insert_batch(&mut *tx, &batch).await?;
        tx.commit().await?;

        tracing::info!(%version, count = created.len(), "Stored new ticket batch");
        Ok(BatchOutcome::Created(created))
    }
}
