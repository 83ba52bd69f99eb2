use crate::model::VacationDays;
use fetch_store::StoreResource;

/// Marker type for the vacation-days resource.
pub struct VacationDaysSummary;

/// Shaped outcome of the vacation-days fetch.
#[derive(Debug)]
pub enum VacationDaysResponse {
    Fetched(VacationDays),
}

impl StoreResource for VacationDaysSummary {
    type Data = Option<VacationDays>;
    type Response = VacationDaysResponse;

    fn initial() -> Option<VacationDays> {
        None
    }

    fn merge(_data: &Option<VacationDays>, response: VacationDaysResponse) -> Option<VacationDays> {
        match response {
            VacationDaysResponse::Fetched(summary) => Some(summary),
        }
    }
}
