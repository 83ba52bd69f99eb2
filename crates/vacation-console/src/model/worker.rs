use serde::{Deserialize, Serialize};

/// One worker row in the admin view.
///
/// `work_time` is the contracted fraction of a full-time position expressed
/// in hours per day (e.g. `8.0` for full time, `4.0` for half).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub user_id: u64,
    pub name: String,
    pub mail_address: String,
    pub work_time: f32,
}
