//! # Vacation Days Store
//!
//! Client-side cache of the logged-in worker's remaining vacation pool.
//! The cache starts empty (`None`) and a fetch replaces the whole summary.

pub mod actions;
pub mod resource;

pub use actions::{FetchVacationDays, FetchVacationDaysParams};
pub use resource::{VacationDaysResponse, VacationDaysSummary};

use crate::dispatchers::VacationDaysDispatcher;
use fetch_store::{RequestGateway, ResourceDispatcher, StateStore};
use std::sync::Arc;

/// Creates the vacation-days store and its typed dispatcher.
pub fn new(
    gateway: Arc<dyn RequestGateway>,
) -> (StateStore<VacationDaysSummary>, VacationDaysDispatcher) {
    let (store, handle) = StateStore::new(32);
    let dispatcher = VacationDaysDispatcher::new(ResourceDispatcher::new(handle, gateway));
    (store, dispatcher)
}
