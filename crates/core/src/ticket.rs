//! The ticket record and its schema rules.
//!
//! Field names on the wire are the human-readable labels consumers were
//! given (`"Create Date"`, `"Customer Email"`, ...). Those labels are
//! applied here with serde renames and are also the shape in which a ticket
//! is persisted, so the in-memory field names are free to follow Rust
//! conventions.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::Timestamp;
use crate::version::{ApiVersion, TimestampEncoding};

/// Lifecycle state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TicketStatus {
    Open,
    Resolved,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 2] = [TicketStatus::Open, TicketStatus::Resolved];

    pub fn is_resolved(self) -> bool {
        matches!(self, TicketStatus::Resolved)
    }
}

/// A ticket timestamp in the representation its API version dictates.
///
/// Untagged so that v1 documents carry a plain RFC 3339 string and v2
/// documents a plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum TicketTime {
    /// Seconds since the Unix epoch (v2).
    Epoch(i64),
    /// Calendar timestamp in UTC (v1).
    Calendar(chrono::DateTime<chrono::Utc>),
}

impl TicketTime {
    /// Package an instant according to a version's encoding.
    pub fn encode(instant: Timestamp, encoding: TimestampEncoding) -> Self {
        match encoding {
            TimestampEncoding::Calendar => TicketTime::Calendar(instant),
            TimestampEncoding::EpochSeconds => TicketTime::Epoch(instant.timestamp()),
        }
    }

    pub fn encoding(&self) -> TimestampEncoding {
        match self {
            TicketTime::Epoch(_) => TimestampEncoding::EpochSeconds,
            TicketTime::Calendar(_) => TimestampEncoding::Calendar,
        }
    }

    /// Seconds since the Unix epoch regardless of representation.
    pub fn epoch_seconds(&self) -> i64 {
        match self {
            TicketTime::Epoch(secs) => *secs,
            TicketTime::Calendar(ts) => ts.timestamp(),
        }
    }
}

/// A support ticket as served by `GET /api/{version}/tickets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_ticket_shape"))]
pub struct Ticket {
    #[serde(rename = "Create Date")]
    pub create_date: TicketTime,

    #[serde(rename = "Status")]
    pub status: TicketStatus,

    /// Present only when `Status` is `Resolved`.
    #[serde(rename = "Resolved Date", default)]
    pub resolved_date: Option<TicketTime>,

    #[serde(rename = "Agent")]
    #[validate(length(min = 1))]
    pub agent: String,

    /// Customer satisfaction as a percentage string, e.g. `"87%"`.
    /// Only ever present on resolved tickets.
    #[serde(rename = "CSAT", default)]
    pub csat: Option<String>,

    #[serde(rename = "Description")]
    #[validate(length(min = 1))]
    pub description: String,

    #[serde(rename = "Subject")]
    #[validate(length(min = 1))]
    pub subject: String,

    #[serde(rename = "Customer Email")]
    #[validate(email)]
    pub customer_email: String,

    pub endpoint_version: ApiVersion,
}

impl Ticket {
    /// Run the schema rules and fold any failure into a [`CoreError`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(format!("ticket rejected: {e}")))
    }
}

/// Parse a `"NN%"` satisfaction score. Returns `None` when malformed.
pub fn parse_csat(csat: &str) -> Option<u8> {
    let pct: u8 = csat.strip_suffix('%')?.parse().ok()?;
    (pct <= 100).then_some(pct)
}

fn shape_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_ticket_shape(ticket: &Ticket) -> Result<(), ValidationError> {
    let encoding = ticket.endpoint_version.timestamp_encoding();
    if ticket.create_date.encoding() != encoding {
        return Err(shape_error(
            "timestamp_encoding",
            "Create Date does not match the version's timestamp encoding",
        ));
    }

    match (ticket.status, ticket.resolved_date) {
        (TicketStatus::Open, Some(_)) => {
            return Err(shape_error(
                "open_with_resolution",
                "open tickets cannot carry a Resolved Date",
            ));
        }
        (TicketStatus::Resolved, None) => {
            return Err(shape_error(
                "resolved_without_date",
                "resolved tickets must carry a Resolved Date",
            ));
        }
        (TicketStatus::Resolved, Some(resolved)) => {
            if resolved.encoding() != encoding {
                return Err(shape_error(
                    "timestamp_encoding",
                    "Resolved Date does not match the version's timestamp encoding",
                ));
            }
            if resolved.epoch_seconds() < ticket.create_date.epoch_seconds() {
                return Err(shape_error(
                    "resolved_before_created",
                    "Resolved Date is earlier than Create Date",
                ));
            }
        }
        (TicketStatus::Open, None) => {}
    }

    if let Some(csat) = &ticket.csat {
        if !ticket.status.is_resolved() {
            return Err(shape_error(
                "open_with_csat",
                "open tickets cannot carry a CSAT score",
            ));
        }
        if parse_csat(csat).is_none() {
            return Err(shape_error("csat_format", "CSAT must look like 'NN%'"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn resolved_v1() -> Ticket {
        Ticket {
            create_date: TicketTime::Calendar(at(2026, 3, 1)),
            status: TicketStatus::Resolved,
            resolved_date: Some(TicketTime::Calendar(at(2026, 3, 4))),
            agent: "Ada Moreno".to_string(),
            csat: Some("88%".to_string()),
            description: "Printer is jammed again.".to_string(),
            subject: "Printer jam on floor".to_string(),
            customer_email: "ada@example.com".to_string(),
            endpoint_version: ApiVersion::V1,
        }
    }

    // -- Wire shape --------------------------------------------------------

    #[test]
    fn serializes_with_human_readable_labels() {
        let json = serde_json::to_value(resolved_v1()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "Create Date",
            "Status",
            "Resolved Date",
            "Agent",
            "CSAT",
            "Description",
            "Subject",
            "Customer Email",
            "endpoint_version",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(json["Create Date"], "2026-03-01T12:00:00Z");
        assert_eq!(json["Status"], "Resolved");
        assert_eq!(json["endpoint_version"], "v1");
    }

    #[test]
    fn epoch_times_serialize_as_integers() {
        let created = at(2026, 3, 1);
        let mut ticket = resolved_v1();
        ticket.endpoint_version = ApiVersion::V2;
        ticket.create_date = TicketTime::Epoch(created.timestamp());
        ticket.resolved_date = Some(TicketTime::Epoch(created.timestamp() + 60));

        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["Create Date"], created.timestamp());
        assert!(json["Resolved Date"].is_i64());

        let back: Ticket = serde_json::from_value(json).unwrap();
        assert_eq!(back, ticket);
    }

    #[test]
    fn missing_optional_fields_deserialize_as_none() {
        let json = serde_json::json!({
            "Create Date": "2026-05-05T08:00:00Z",
            "Status": "Open",
            "Agent": "Ada Moreno",
            "Description": "Cannot log in.",
            "Subject": "Login fails",
            "Customer Email": "someone@example.org",
            "endpoint_version": "v1"
        });
        let ticket: Ticket = serde_json::from_value(json).unwrap();
        assert_eq!(ticket.resolved_date, None);
        assert_eq!(ticket.csat, None);
        assert_matches!(ticket.create_date, TicketTime::Calendar(_));
    }

    #[test]
    fn encode_follows_version_encoding() {
        let instant = at(2026, 7, 7);
        assert_eq!(
            TicketTime::encode(instant, TimestampEncoding::Calendar),
            TicketTime::Calendar(instant)
        );
        assert_eq!(
            TicketTime::encode(instant, TimestampEncoding::EpochSeconds),
            TicketTime::Epoch(instant.timestamp())
        );
    }

    // -- Schema rules ------------------------------------------------------

    #[test]
    fn well_formed_ticket_passes() {
        assert!(resolved_v1().check().is_ok());
    }

    #[test]
    fn open_ticket_with_resolution_is_rejected() {
        let mut ticket = resolved_v1();
        ticket.status = TicketStatus::Open;
        ticket.csat = None;
        assert_matches!(ticket.check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn open_ticket_with_csat_is_rejected() {
        let mut ticket = resolved_v1();
        ticket.status = TicketStatus::Open;
        ticket.resolved_date = None;
        assert_matches!(ticket.check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn resolution_before_creation_is_rejected() {
        let mut ticket = resolved_v1();
        ticket.resolved_date = Some(TicketTime::Calendar(at(2026, 2, 1)));
        assert_matches!(ticket.check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn wrong_encoding_for_version_is_rejected() {
        let mut ticket = resolved_v1();
        ticket.endpoint_version = ApiVersion::V2;
        assert_matches!(ticket.check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut ticket = resolved_v1();
        ticket.customer_email = "not-an-email".to_string();
        assert_matches!(ticket.check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn empty_subject_is_rejected() {
        let mut ticket = resolved_v1();
        ticket.subject = String::new();
        assert!(ticket.check().is_err());
    }

    #[test]
    fn csat_parsing() {
        assert_eq!(parse_csat("70%"), Some(70));
        assert_eq!(parse_csat("100%"), Some(100));
        assert_eq!(parse_csat("101%"), None);
        assert_eq!(parse_csat("85"), None);
        assert_eq!(parse_csat("abc%"), None);
    }
}
