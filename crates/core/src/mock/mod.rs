//! Synthetic ticket generation.
//!
//! Produces batches of schema-valid [`Ticket`]s. The only I/O-free
//! randomness source is the caller's RNG (or the thread RNG for
//! [`generate_batch`]), which keeps tests deterministic with a seeded
//! `StdRng`.

pub mod words;

use std::sync::LazyLock;

use chrono::TimeDelta;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::ticket::{Ticket, TicketStatus, TicketTime};
use crate::types::Timestamp;
use crate::version::ApiVersion;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Smallest batch generated on first access to a version.
pub const MIN_BATCH_SIZE: usize = 100;

/// Largest batch generated on first access to a version.
pub const MAX_BATCH_SIZE: usize = 120;

/// Number of distinct agent names tickets are assigned from.
pub const AGENT_POOL_SIZE: usize = 5;

/// Probability that a resolved ticket carries a CSAT score.
pub const CSAT_PROBABILITY: f64 = 0.5;

/// Inclusive CSAT percentage range.
pub const CSAT_RANGE: std::ops::RangeInclusive<u8> = 70..=100;

/// Sentences in a generated description.
const DESCRIPTION_SENTENCES: usize = 3;

/// Words in a generated subject.
const SUBJECT_WORDS: usize = 4;

/// 2026-01-01T00:00:00Z
const WINDOW_START_EPOCH: i64 = 1_767_225_600;

/// 2026-12-31T00:00:00Z
const CREATED_END_EPOCH: i64 = 1_798_675_200;

/// 2026-12-31T23:59:59Z
const RESOLVED_END_EPOCH: i64 = 1_798_761_599;

// ---------------------------------------------------------------------------
// Time window
// ---------------------------------------------------------------------------

/// Calendar window generated timestamps are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketWindow {
    /// Earliest creation instant.
    pub created_from: Timestamp,
    /// Latest creation instant.
    pub created_to: Timestamp,
    /// Latest resolution instant.
    pub resolved_to: Timestamp,
}

impl Default for TicketWindow {
    /// Calendar year 2026.
    fn default() -> Self {
        Self {
            created_from: from_epoch(WINDOW_START_EPOCH),
            created_to: from_epoch(CREATED_END_EPOCH),
            resolved_to: from_epoch(RESOLVED_END_EPOCH),
        }
    }
}

fn from_epoch(secs: i64) -> Timestamp {
    Timestamp::UNIX_EPOCH + TimeDelta::seconds(secs)
}

/// Draw an instant uniformly from `[from, to]` at one-second resolution.
fn random_instant<R: Rng + ?Sized>(rng: &mut R, from: Timestamp, to: Timestamp) -> Timestamp {
    let span = (to - from).num_seconds().max(0);
    from + TimeDelta::seconds(rng.random_range(0..=span))
}

// ---------------------------------------------------------------------------
// Agent pool
// ---------------------------------------------------------------------------

static AGENTS: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut rng = rand::rng();
    (0..AGENT_POOL_SIZE)
        .map(|_| words::person_name(&mut rng))
        .collect()
});

/// The agent names for this process. Drawn once, on first use.
pub fn agent_pool() -> &'static [String] {
    &AGENTS
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Draw a batch size uniformly from `[MIN_BATCH_SIZE, MAX_BATCH_SIZE]`.
pub fn batch_size<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.random_range(MIN_BATCH_SIZE..=MAX_BATCH_SIZE)
}

/// Generate `count` tickets for `version` using the process agent pool and
/// the default 2026 window.
pub fn generate_tickets<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    version: ApiVersion,
) -> Vec<Ticket> {
    generate_with(rng, count, version, agent_pool(), &TicketWindow::default())
}

/// Generate a fresh first-access batch for `version` with the thread RNG.
///
/// Synchronous on purpose: the thread RNG is not `Send` and must not be
/// held across an `.await`.
pub fn generate_batch(version: ApiVersion) -> Vec<Ticket> {
    let mut rng = rand::rng();
    let count = batch_size(&mut rng);
    generate_tickets(&mut rng, count, version)
}

/// Generate `count` tickets with an explicit agent pool and window.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    version: ApiVersion,
    agents: &[String],
    window: &TicketWindow,
) -> Vec<Ticket> {
    let encoding = version.timestamp_encoding();

    (0..count)
        .map(|_| {
            let created = random_instant(rng, window.created_from, window.created_to);
            let status = *TicketStatus::ALL.choose(rng).unwrap_or(&TicketStatus::Open);

            let (resolved, csat) = if status.is_resolved() {
                let resolved = random_instant(rng, created, window.resolved_to);
                let csat = rng
                    .random_bool(CSAT_PROBABILITY)
                    .then(|| format!("{}%", rng.random_range(CSAT_RANGE)));
                (Some(resolved), csat)
            } else {
                (None, None)
            };

            let agent = agents
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| words::person_name(rng));

            Ticket {
                create_date: TicketTime::encode(created, encoding),
                status,
                resolved_date: resolved.map(|ts| TicketTime::encode(ts, encoding)),
                agent,
                csat,
                description: words::paragraph(rng, DESCRIPTION_SENTENCES),
                subject: words::phrase(rng, SUBJECT_WORDS),
                customer_email: words::email(rng),
                endpoint_version: version,
            }
        })
        .collect()
}
