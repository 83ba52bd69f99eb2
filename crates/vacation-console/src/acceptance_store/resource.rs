use crate::model::{Acceptance, AcceptanceStatus};
use fetch_store::{normalize, StoreResource};

/// Marker type for the acceptances resource.
pub struct Acceptances;

/// Shaped outcomes of the acceptance actions.
#[derive(Debug)]
pub enum AcceptancesResponse {
    /// Full refresh of the approver's queue.
    Fetched(Vec<Acceptance>),
    /// The backend recorded a decision for one request.
    Resolved {
        acceptance_id: u64,
        status: AcceptanceStatus,
    },
}

impl StoreResource for Acceptances {
    type Data = Vec<Acceptance>;
    type Response = AcceptancesResponse;

    fn initial() -> Vec<Acceptance> {
        Vec::new()
    }

    fn merge(data: &Vec<Acceptance>, response: AcceptancesResponse) -> Vec<Acceptance> {
        match response {
            AcceptancesResponse::Fetched(acceptances) => acceptances,
            AcceptancesResponse::Resolved {
                acceptance_id,
                status,
            } => normalize::patch_entity(data, |a| a.id == acceptance_id, |a| a.status = status),
        }
    }
}
