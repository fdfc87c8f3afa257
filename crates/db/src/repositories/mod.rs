//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept a Postgres executor (`&PgPool` or `&mut *tx`) as the first
//! argument.

pub mod ticket_repo;

pub use ticket_repo::TicketRepo;
