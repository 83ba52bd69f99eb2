//! # Absence History Store
//!
//! Client-side cache of one worker's absence history log for a chosen year.
//! A single action feeds it: the list fetch, which replaces the cached log
//! wholesale.

pub mod actions;
pub mod resource;

pub use actions::{FetchAbsenceHistory, FetchAbsenceHistoryParams, ABSENCE_HISTORY_ENDPOINT};
pub use resource::{AbsenceHistory, AbsenceHistoryResponse};

use crate::dispatchers::AbsenceHistoryDispatcher;
use fetch_store::{RequestGateway, ResourceDispatcher, StateStore};
use std::sync::Arc;

/// Creates the absence-history store and its typed dispatcher.
pub fn new(
    gateway: Arc<dyn RequestGateway>,
) -> (StateStore<AbsenceHistory>, AbsenceHistoryDispatcher) {
    let (store, handle) = StateStore::new(32);
    let dispatcher = AbsenceHistoryDispatcher::new(ResourceDispatcher::new(handle, gateway));
    (store, dispatcher)
}
