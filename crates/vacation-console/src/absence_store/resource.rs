use crate::model::AbsenceEvent;
use fetch_store::StoreResource;

/// Marker type for the absence-history resource.
pub struct AbsenceHistory;

/// Shaped outcome of the absence-history fetch.
#[derive(Debug)]
pub enum AbsenceHistoryResponse {
    Fetched(Vec<AbsenceEvent>),
}

impl StoreResource for AbsenceHistory {
    type Data = Vec<AbsenceEvent>;
    type Response = AbsenceHistoryResponse;

    fn initial() -> Vec<AbsenceEvent> {
        Vec::new()
    }

    fn merge(_data: &Vec<AbsenceEvent>, response: AbsenceHistoryResponse) -> Vec<AbsenceEvent> {
        match response {
            AbsenceHistoryResponse::Fetched(events) => events,
        }
    }
}
