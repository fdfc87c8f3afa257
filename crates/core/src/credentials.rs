//! Shared-secret gate for the versioned ticket endpoints.
//!
//! Each API version has its own expected `X-API-KEY` value. A version with
//! no configured value is switched off entirely, which is reported
//! differently from a caller presenting the wrong key.

use crate::error::CoreError;
use crate::version::ApiVersion;

/// Name of the request header carrying the credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Why a credential was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialRejection {
    /// The version has no expected credential configured.
    Unconfigured,
    /// The supplied credential does not match the expected one.
    Mismatch,
}

/// Compare a supplied credential against the expected value.
///
/// An empty expected value counts as unconfigured.
pub fn check_credential(
    expected: Option<&str>,
    supplied: &str,
) -> Result<(), CredentialRejection> {
    match expected {
        None | Some("") => Err(CredentialRejection::Unconfigured),
        Some(expected) if expected == supplied => Ok(()),
        Some(_) => Err(CredentialRejection::Mismatch),
    }
}

impl CredentialRejection {
    pub fn into_core_error(self, version: ApiVersion) -> CoreError {
        match self {
            CredentialRejection::Unconfigured => CoreError::VersionDisabled(version),
            CredentialRejection::Mismatch => CoreError::Unauthorized(
                "Invalid or missing API Key for this endpoint".into(),
            ),
        }
    }
}
