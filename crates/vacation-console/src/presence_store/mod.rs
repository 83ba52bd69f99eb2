//! # Presence Store
//!
//! Client-side cache of the logged-in worker's presence confirmations,
//! keyed by date. A full fetch rebuilds the mapping from scratch
//! (KeyedMerge): a confirmation removed server-side disappears client-side
//! on the next fetch. Confirming a single day upserts just that date.

pub mod actions;
pub mod resource;

pub use actions::{
    ConfirmPresence, ConfirmPresenceParams, FetchMyPresenceConfirmations, PRESENCE_ENDPOINT,
};
pub use resource::{PresenceConfirmations, PresenceResponse};

use crate::dispatchers::PresenceDispatcher;
use fetch_store::{RequestGateway, ResourceDispatcher, StateStore};
use std::sync::Arc;

/// Creates the presence store and its typed dispatcher.
pub fn new(
    gateway: Arc<dyn RequestGateway>,
) -> (StateStore<PresenceConfirmations>, PresenceDispatcher) {
    let (store, handle) = StateStore::new(32);
    let dispatcher = PresenceDispatcher::new(ResourceDispatcher::new(handle, gateway));
    (store, dispatcher)
}
