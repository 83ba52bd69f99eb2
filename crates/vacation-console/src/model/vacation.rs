use serde::{Deserialize, Serialize};

/// The logged-in worker's remaining vacation pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationDays {
    pub remaining_days: f32,
    pub remaining_hours: f32,
    pub work_time: f32,
}
