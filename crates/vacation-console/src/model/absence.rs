use serde::{Deserialize, Serialize};

/// One entry of a worker's absence history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceEvent {
    pub id: u64,
    /// ISO date the entry was created.
    pub created: String,
    /// Hours deducted from (negative) or added to (positive) the pool.
    pub deducted_hours: f32,
    pub comment: String,
}
