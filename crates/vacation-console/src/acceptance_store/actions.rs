use super::resource::{Acceptances, AcceptancesResponse};
use crate::model::AcceptanceStatus;
use fetch_store::{FetchAction, GatewayCall};
use serde_json::{json, Value};

pub const ACCEPTANCES_ENDPOINT: &str = "/api/v2/acceptances";

/// Fetch of the approver's pending-request queue.
pub struct FetchAcceptances;

impl FetchAction for FetchAcceptances {
    type Resource = Acceptances;
    type Params = ();

    fn call(_: &()) -> GatewayCall {
        GatewayCall::get(ACCEPTANCES_ENDPOINT)
    }

    fn shape(_: &(), payload: Value) -> Result<AcceptancesResponse, String> {
        serde_json::from_value(payload)
            .map(AcceptancesResponse::Fetched)
            .map_err(|e| format!("malformed acceptances payload: {e}"))
    }
}

#[derive(Debug, Clone)]
pub struct ResolveAcceptanceParams {
    pub acceptance_id: u64,
    pub status: AcceptanceStatus,
}

/// Accept or reject one request. The backend echoes the recorded status,
/// which patches only that request.
pub struct ResolveAcceptance;

impl FetchAction for ResolveAcceptance {
    type Resource = Acceptances;
    type Params = ResolveAcceptanceParams;

    fn call(params: &ResolveAcceptanceParams) -> GatewayCall {
        GatewayCall::put(
            format!("{ACCEPTANCES_ENDPOINT}/{}", params.acceptance_id),
            json!({ "status": params.status }),
        )
    }

    fn shape(params: &ResolveAcceptanceParams, payload: Value) -> Result<AcceptancesResponse, String> {
        serde_json::from_value(payload)
            .map(|status| AcceptancesResponse::Resolved {
                acceptance_id: params.acceptance_id,
                status,
            })
            .map_err(|e| format!("malformed acceptance status payload: {e}"))
    }
}
