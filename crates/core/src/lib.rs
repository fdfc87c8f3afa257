//! Domain layer for the ticket service: the ticket record, API versions,
//! the shared-secret gate and the mock batch generator. No I/O lives here.

pub mod credentials;
pub mod error;
pub mod mock;
pub mod ticket;
pub mod types;
pub mod version;
