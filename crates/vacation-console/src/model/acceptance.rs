use serde::{Deserialize, Serialize};

/// Decision state of a vacation request awaiting a leader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcceptanceStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A vacation request as seen by the approver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acceptance {
    pub id: u64,
    pub requester_name: String,
    /// ISO date the requested leave starts.
    pub start_date: String,
    /// ISO date the requested leave ends.
    pub end_date: String,
    pub status: AcceptanceStatus,
}
