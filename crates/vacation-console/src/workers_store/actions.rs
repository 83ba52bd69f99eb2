use super::resource::{Workers, WorkersResponse};
use fetch_store::{FetchAction, GatewayCall};
use serde_json::{json, Value};

pub const WORKERS_ENDPOINT: &str = "/api/v2/users";

/// Full roster fetch.
pub struct FetchWorkers;

impl FetchAction for FetchWorkers {
    type Resource = Workers;
    type Params = ();

    fn call(_: &()) -> GatewayCall {
        GatewayCall::get(WORKERS_ENDPOINT)
    }

    fn shape(_: &(), payload: Value) -> Result<WorkersResponse, String> {
        serde_json::from_value(payload)
            .map(WorkersResponse::Fetched)
            .map_err(|e| format!("malformed workers payload: {e}"))
    }
}

#[derive(Debug, Clone)]
pub struct ChangeWorkTimeParams {
    pub user_id: u64,
    pub value: f32,
}

/// Work-time change for one worker. The backend echoes the stored value,
/// which patches only that worker's row.
pub struct ChangeWorkTime;

impl FetchAction for ChangeWorkTime {
    type Resource = Workers;
    type Params = ChangeWorkTimeParams;

    fn call(params: &ChangeWorkTimeParams) -> GatewayCall {
        GatewayCall::put(
            format!("{WORKERS_ENDPOINT}/{}/work-time", params.user_id),
            json!({ "value": params.value }),
        )
    }

    fn shape(params: &ChangeWorkTimeParams, payload: Value) -> Result<WorkersResponse, String> {
        serde_json::from_value(payload)
            .map(|work_time| WorkersResponse::WorkTimeChanged {
                user_id: params.user_id,
                work_time,
            })
            .map_err(|e| format!("malformed work time payload: {e}"))
    }
}
