//! # Acceptances Store
//!
//! Client-side cache of the vacation requests awaiting the logged-in
//! leader's decision. The list fetch replaces the cache; resolving one
//! request patches only that request's status from the echoed decision.

pub mod actions;
pub mod resource;

pub use actions::{
    FetchAcceptances, ResolveAcceptance, ResolveAcceptanceParams, ACCEPTANCES_ENDPOINT,
};
pub use resource::{Acceptances, AcceptancesResponse};

use crate::dispatchers::AcceptancesDispatcher;
use fetch_store::{RequestGateway, ResourceDispatcher, StateStore};
use std::sync::Arc;

/// Creates the acceptances store and its typed dispatcher.
pub fn new(gateway: Arc<dyn RequestGateway>) -> (StateStore<Acceptances>, AcceptancesDispatcher) {
    let (store, handle) = StateStore::new(32);
    let dispatcher = AcceptancesDispatcher::new(ResourceDispatcher::new(handle, gateway));
    (store, dispatcher)
}
