//! Request extractors enforcing access rules.
//!
//! - [`api_key::RequireApiKey`] -- Requires the `X-API-KEY` configured for an API version.

pub mod api_key;
