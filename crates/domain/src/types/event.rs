//! Event listing and ticket statistics types

use serde::{Deserialize, Serialize};

/// An event the authenticated staff member can scan for.
///
/// Dates and times arrive as display strings from the backend; purchase
/// totals are stringly typed on the wire as well.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub banner_image: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub access_role: String,
    pub timing_status: String,
    pub total_tickets_purchased: String,
    pub total_buyers: String,
}

/// Aggregate scan counters for an event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanTotals {
    pub sold: u32,
    pub scanned: u32,
    pub unscanned: u32,
}

/// Per-ticket-type scan counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub ticket_id: String,
    pub ticket_name: String,
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub sold: u32,
    pub scanned: u32,
    pub unscanned: u32,
}

/// Per-event ticket statistics shown on the event dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub totals: ScanTotals,
    pub by_ticket: Vec<TicketSummary>,
}
