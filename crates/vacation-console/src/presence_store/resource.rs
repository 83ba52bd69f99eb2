use crate::model::PresenceConfirmation;
use fetch_store::{normalize, StoreResource};
use std::collections::BTreeMap;

/// Marker type for the presence-confirmations resource.
pub struct PresenceConfirmations;

/// Shaped outcomes of the presence actions.
#[derive(Debug)]
pub enum PresenceResponse {
    /// Full refresh; rebuilt into the date-keyed mapping.
    Fetched(Vec<PresenceConfirmation>),
    /// The backend stored a confirmation for one day.
    Confirmed(PresenceConfirmation),
}

impl StoreResource for PresenceConfirmations {
    type Data = BTreeMap<String, PresenceConfirmation>;
    type Response = PresenceResponse;

    fn initial() -> Self::Data {
        BTreeMap::new()
    }

    fn merge(data: &Self::Data, response: PresenceResponse) -> Self::Data {
        match response {
            // Replace-by-rebuild: stale dates are dropped, not patched over.
            PresenceResponse::Fetched(confirmations) => {
                normalize::keyed_by(confirmations, |c| c.date.clone())
            }
            PresenceResponse::Confirmed(confirmation) => {
                let mut next = data.clone();
                next.insert(confirmation.date.clone(), confirmation);
                next
            }
        }
    }
}
