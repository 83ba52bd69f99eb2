use super::resource::{AbsenceHistory, AbsenceHistoryResponse};
use fetch_store::{FetchAction, GatewayCall};
use serde_json::Value;

pub const ABSENCE_HISTORY_ENDPOINT: &str = "/api/v2/absence-history";

#[derive(Debug, Clone)]
pub struct FetchAbsenceHistoryParams {
    pub user_id: u64,
    pub year: i32,
}

/// Fetch of one worker's absence log for a year.
pub struct FetchAbsenceHistory;

impl FetchAction for FetchAbsenceHistory {
    type Resource = AbsenceHistory;
    type Params = FetchAbsenceHistoryParams;

    fn call(params: &FetchAbsenceHistoryParams) -> GatewayCall {
        GatewayCall::get(format!(
            "{ABSENCE_HISTORY_ENDPOINT}/{}/?year={}",
            params.user_id, params.year
        ))
    }

    fn shape(_: &FetchAbsenceHistoryParams, payload: Value) -> Result<AbsenceHistoryResponse, String> {
        serde_json::from_value(payload)
            .map(AbsenceHistoryResponse::Fetched)
            .map_err(|e| format!("malformed absence history payload: {e}"))
    }
}
