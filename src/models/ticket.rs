//! Ticket models for the Zendesk API.
//!
//! Tickets are created once per support request with an initial comment
//! and a set of custom-field values; this client never updates or closes
//! them.

use serde::{Deserialize, Serialize};

/// A single custom-field entry on a ticket.
///
/// Zendesk addresses custom fields by numeric identifier; values are
/// untyped on the wire (string, number, boolean, or null depending on
/// the field definition).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    /// The field definition's numeric identifier.
    pub id: u64,

    /// The value, if set.
    #[serde(default)]
    pub value: serde_json::Value,
}

impl CustomField {
    /// Creates a custom-field entry with a string value.
    pub fn new(id: u64, value: impl Into<serde_json::Value>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

/// A Zendesk ticket record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID assigned by Zendesk.
    pub id: u64,

    /// Subject/title of the ticket.
    #[serde(default)]
    pub subject: Option<String>,

    /// Body of the first comment.
    #[serde(default)]
    pub description: Option<String>,

    /// Current status name (e.g., "open", "solved").
    #[serde(default)]
    pub status: Option<String>,

    /// ID of the user who requested the ticket.
    #[serde(default)]
    pub requester_id: Option<u64>,

    /// Custom-field values keyed by field identifier.
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,

    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Ticket {
    /// Returns the subject or a placeholder.
    pub fn display_subject(&self) -> &str {
        self.subject.as_deref().unwrap_or("(No subject)")
    }

    /// Returns the status or "unknown".
    pub fn display_status(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }
}

/// A ticket custom-field definition.
///
/// Returned by `GET /ticket_fields.json`; describes the fields that can
/// appear in a ticket's `custom_fields` mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketField {
    /// The field's numeric identifier.
    pub id: u64,

    /// Human-readable field title.
    #[serde(default)]
    pub title: Option<String>,

    /// Field type name (e.g., "text", "date", "tagger").
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Whether the field is active.
    #[serde(default)]
    pub active: Option<bool>,

    /// Field description shown to agents.
    #[serde(default)]
    pub description: Option<String>,
}

/// Response wrapper for `GET /users/{id}/tickets/requested.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketsResponse {
    /// The tickets the user has requested.
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

/// Response wrapper for single-ticket operations.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketResponse {
    /// The ticket record.
    pub ticket: Ticket,
}

/// Response wrapper for `GET /ticket_fields.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketFieldsResponse {
    /// All custom-field definitions known to the account.
    #[serde(default)]
    pub ticket_fields: Vec<TicketField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_field_defaults_to_null_value() {
        let field: CustomField = serde_json::from_str(r#"{"id":360015380794}"#).unwrap();
        assert_eq!(field.id, 360015380794);
        assert!(field.value.is_null());
    }

    #[test]
    fn test_ticket_deserializes_with_minimal_fields() {
        let ticket: Ticket = serde_json::from_str(r#"{"id":9}"#).unwrap();
        assert_eq!(ticket.id, 9);
        assert!(ticket.custom_fields.is_empty());
        assert_eq!(ticket.display_subject(), "(No subject)");
        assert_eq!(ticket.display_status(), "unknown");
    }

    #[test]
    fn test_ticket_field_renames_type() {
        let field: TicketField =
            serde_json::from_str(r#"{"id":1,"title":"Order ID","type":"text","active":true}"#)
                .unwrap();
        assert_eq!(field.kind.as_deref(), Some("text"));
        assert_eq!(field.title.as_deref(), Some("Order ID"));
    }
}
