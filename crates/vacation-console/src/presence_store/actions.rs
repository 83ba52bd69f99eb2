use super::resource::{PresenceConfirmations, PresenceResponse};
use fetch_store::{FetchAction, GatewayCall};
use serde_json::{json, Value};

pub const PRESENCE_ENDPOINT: &str = "/api/v2/presence-confirmations";

/// Fetch of the logged-in worker's confirmations.
pub struct FetchMyPresenceConfirmations;

impl FetchAction for FetchMyPresenceConfirmations {
    type Resource = PresenceConfirmations;
    type Params = ();

    fn call(_: &()) -> GatewayCall {
        GatewayCall::get(format!("{PRESENCE_ENDPOINT}/me"))
    }

    fn shape(_: &(), payload: Value) -> Result<PresenceResponse, String> {
        serde_json::from_value(payload)
            .map(PresenceResponse::Fetched)
            .map_err(|e| format!("malformed presence payload: {e}"))
    }
}

#[derive(Debug, Clone)]
pub struct ConfirmPresenceParams {
    pub user_id: u64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Confirmation of presence for one day. The backend echoes the stored
/// confirmation, which upserts that date in the mapping.
pub struct ConfirmPresence;

impl FetchAction for ConfirmPresence {
    type Resource = PresenceConfirmations;
    type Params = ConfirmPresenceParams;

    fn call(params: &ConfirmPresenceParams) -> GatewayCall {
        GatewayCall::post(
            PRESENCE_ENDPOINT,
            json!({
                "userId": params.user_id,
                "date": params.date,
                "startTime": params.start_time,
                "endTime": params.end_time,
            }),
        )
    }

    fn shape(_: &ConfirmPresenceParams, payload: Value) -> Result<PresenceResponse, String> {
        serde_json::from_value(payload)
            .map(PresenceResponse::Confirmed)
            .map_err(|e| format!("malformed confirmation payload: {e}"))
    }
}
