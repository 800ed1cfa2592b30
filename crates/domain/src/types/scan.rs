//! Ticket scan verification types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a ticket code was captured at the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMethod {
    Qr,
    Manual,
}

/// Request to verify one scanned ticket code against the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanVerifyRequest {
    pub event_id: String,
    pub code: String,
    pub method: ScanMethod,
    pub timestamp: DateTime<Utc>,
    pub signature: String,
}

/// Ticket details attached to a verification result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedTicket {
    pub ticket_id: String,
    pub ticket_name: String,
    pub holder: String,
    pub email: String,
}

/// Details of the scan as recorded by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub gate: String,
    pub method: String,
    pub device_id: Option<String>,
    pub scanned_at: DateTime<Utc>,
}

/// Running scan counters after this verification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub scanned: u32,
    pub total: u32,
}

/// Verification outcome for a scanned code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanVerifyResponse {
    pub outcome: String,
    pub ticket: ScannedTicket,
    pub scan: ScanRecord,
    pub stats: ScanStats,
}
