//! Supported API versions and the wire shape each one commits to.
//!
//! The only behavioural difference between versions is how ticket
//! timestamps are rendered. v1 consumers receive RFC 3339 strings, v2
//! consumers receive integer epoch seconds. Consumers depend on this, so
//! the mapping lives in one table ([`ApiVersion::timestamp_encoding`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How `Create Date` / `Resolved Date` are represented for a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampEncoding {
    /// RFC 3339 calendar timestamp, e.g. `"2026-03-14T09:26:53Z"`.
    Calendar,
    /// Integer seconds since the Unix epoch.
    EpochSeconds,
}

/// A versioned ticket endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    /// Every supported version, in route order.
    pub const ALL: [ApiVersion; 2] = [ApiVersion::V1, ApiVersion::V2];

    /// The version tag stored on every ticket and used in route paths.
    pub fn as_str(self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }

    pub fn timestamp_encoding(self) -> TimestampEncoding {
        match self {
            ApiVersion::V1 => TimestampEncoding::Calendar,
            ApiVersion::V2 => TimestampEncoding::EpochSeconds,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown API version '{0}'")]
pub struct UnknownVersion(pub String);

impl FromStr for ApiVersion {
    type Err = UnknownVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(ApiVersion::V1),
            "v2" => Ok(ApiVersion::V2),
            other => Err(UnknownVersion(other.to_string())),
        }
    }
}
