use super::resource::{VacationDaysResponse, VacationDaysSummary};
use crate::workers_store::WORKERS_ENDPOINT;
use fetch_store::{FetchAction, GatewayCall};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct FetchVacationDaysParams {
    pub user_id: u64,
}

/// Fetch of one worker's remaining vacation pool.
pub struct FetchVacationDays;

impl FetchAction for FetchVacationDays {
    type Resource = VacationDaysSummary;
    type Params = FetchVacationDaysParams;

    fn call(params: &FetchVacationDaysParams) -> GatewayCall {
        GatewayCall::get(format!("{WORKERS_ENDPOINT}/{}/vacation-days", params.user_id))
    }

    fn shape(_: &FetchVacationDaysParams, payload: Value) -> Result<VacationDaysResponse, String> {
        serde_json::from_value(payload)
            .map(VacationDaysResponse::Fetched)
            .map_err(|e| format!("malformed vacation days payload: {e}"))
    }
}
