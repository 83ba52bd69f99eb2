use serde::{Deserialize, Serialize};

/// A confirmed presence for one worker on one day.
///
/// The date string doubles as the natural key for the presence store's
/// keyed mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceConfirmation {
    /// ISO date, e.g. `2021-08-19`.
    pub date: String,
    /// Start of the working day, e.g. `08:00`.
    pub start_time: String,
    /// End of the working day, e.g. `16:00`.
    pub end_time: String,
    pub user_id: u64,
}
