//! Row structs returned by the repositories.

pub mod ticket;
