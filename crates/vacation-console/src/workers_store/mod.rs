//! # Workers Store
//!
//! Client-side cache of the worker roster for the admin view. Two actions
//! feed it: a full list fetch (Replace) and a work-time change for one
//! worker (TargetedMutation — the echoed value patches that worker only,
//! preserving roster order).

pub mod actions;
pub mod resource;

pub use actions::{ChangeWorkTime, ChangeWorkTimeParams, FetchWorkers, WORKERS_ENDPOINT};
pub use resource::{Workers, WorkersResponse};

use crate::dispatchers::WorkersDispatcher;
use fetch_store::{RequestGateway, ResourceDispatcher, StateStore};
use std::sync::Arc;

/// Creates the workers store and its typed dispatcher.
pub fn new(gateway: Arc<dyn RequestGateway>) -> (StateStore<Workers>, WorkersDispatcher) {
    let (store, handle) = StateStore::new(32);
    let dispatcher = WorkersDispatcher::new(ResourceDispatcher::new(handle, gateway));
    (store, dispatcher)
}
