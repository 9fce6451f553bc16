//! Flattened ticket projection.
//!
//! The integration stores its ticket metadata in a fixed set of Zendesk
//! custom fields. Downstream consumers don't want to chase numeric field
//! identifiers through the `custom_fields` array, so this module pulls
//! the known fields out into named attributes. The projection is pure:
//! no I/O, and a ticket missing a known field yields a null attribute,
//! never an error.

use serde::{Deserialize, Serialize};

use super::{CustomField, Ticket};

/// Numeric identifiers of the custom fields the integration owns.
///
/// These are account-level field definitions; the values are fixed for
/// the lifetime of the integration.
pub mod field_ids {
    /// Order the ticket complains about.
    pub const ORDER_ID: u64 = 360_015_380_794;
    /// Date the order was delivered.
    pub const DELIVERY_DATE: u64 = 360_015_384_053;
    /// Date a decision on the complaint was made.
    pub const DECISION_DATE: u64 = 360_015_384_673;
    /// Complaint type.
    pub const TYPE: u64 = 360_015_390_013;
    /// Complaint category.
    pub const CATEGORY: u64 = 360_015_341_793;
    /// Complaint subcategory.
    pub const SUBCATEGORY: u64 = 360_016_595_493;
    /// Action taken to resolve the complaint.
    pub const ACTION: u64 = 360_015_422_174;
    /// Affected SKUs with quantities.
    pub const SKU_WITH_QUANTITY: u64 = 360_015_384_213;
}

/// A ticket with its known custom fields lifted into named attributes.
///
/// Attributes sourced from absent custom fields serialize as JSON `null`
/// rather than being omitted, so every record has the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatTicket {
    /// Ticket ID.
    pub id: u64,

    /// Ticket status name.
    pub status: Option<String>,

    /// Order identifier, from the order-ID custom field.
    pub order_id: Option<serde_json::Value>,

    /// Delivery date, from the delivery-date custom field.
    pub delivery_date: Option<serde_json::Value>,

    /// When the complaint was reported (the ticket's creation time).
    pub report_date: Option<String>,

    /// Decision date, from the decision-date custom field.
    pub decision_date: Option<serde_json::Value>,

    /// Complaint type, from the type custom field.
    #[serde(rename = "type")]
    pub kind: Option<serde_json::Value>,

    /// Category, from the category custom field.
    pub category: Option<serde_json::Value>,

    /// Subcategory, from the subcategory custom field.
    pub subcategory: Option<serde_json::Value>,

    /// Ticket subject.
    pub subject: Option<String>,

    /// Resolution action, from the action custom field.
    pub action: Option<serde_json::Value>,

    /// Ticket description (body of the first comment).
    pub description: Option<String>,

    /// Affected SKUs with quantities, from the SKU custom field.
    pub sku_with_quantity: Option<serde_json::Value>,
}

impl FlatTicket {
    /// Builds the flat projection of a single ticket.
    pub fn from_ticket(ticket: &Ticket) -> Self {
        let fields = &ticket.custom_fields;
        Self {
            id: ticket.id,
            status: ticket.status.clone(),
            order_id: find_value_by_id(fields, field_ids::ORDER_ID),
            delivery_date: find_value_by_id(fields, field_ids::DELIVERY_DATE),
            report_date: ticket.created_at.clone(),
            decision_date: find_value_by_id(fields, field_ids::DECISION_DATE),
            kind: find_value_by_id(fields, field_ids::TYPE),
            category: find_value_by_id(fields, field_ids::CATEGORY),
            subcategory: find_value_by_id(fields, field_ids::SUBCATEGORY),
            subject: ticket.subject.clone(),
            action: find_value_by_id(fields, field_ids::ACTION),
            description: ticket.description.clone(),
            sku_with_quantity: find_value_by_id(fields, field_ids::SKU_WITH_QUANTITY),
        }
    }
}

/// Returns the value of the first field with the given identifier, or
/// `None` if no field matches.
pub fn find_value_by_id(fields: &[CustomField], desired_id: u64) -> Option<serde_json::Value> {
    fields
        .iter()
        .find(|field| field.id == desired_id)
        .map(|field| field.value.clone())
}

/// Flattens each ticket's custom fields into a [`FlatTicket`] record.
pub fn flatten_tickets(tickets: &[Ticket]) -> Vec<FlatTicket> {
    tickets.iter().map(FlatTicket::from_ticket).collect()
}
