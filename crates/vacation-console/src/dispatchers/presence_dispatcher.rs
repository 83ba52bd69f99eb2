//! # Presence Dispatcher
//!
//! High-level API for the presence store: fetch of the logged-in worker's
//! confirmations and a single-day confirmation.

use crate::presence_store::{
    ConfirmPresence, ConfirmPresenceParams, FetchMyPresenceConfirmations, PresenceConfirmations,
};
use fetch_store::{ResourceDispatcher, StoreHandle};
use tracing::{debug, instrument};

/// Dispatcher for the presence store.
#[derive(Clone)]
pub struct PresenceDispatcher {
    inner: ResourceDispatcher<PresenceConfirmations>,
}

impl PresenceDispatcher {
    pub fn new(inner: ResourceDispatcher<PresenceConfirmations>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &ResourceDispatcher<PresenceConfirmations> {
        &self.inner
    }

    pub fn handle(&self) -> &StoreHandle<PresenceConfirmations> {
        self.inner.handle()
    }

    /// Refreshes the logged-in worker's confirmations.
    #[instrument(skip(self))]
    pub fn fetch_my_confirmations(&self) {
        debug!("dispatching");
        self.inner.dispatch_fetch::<FetchMyPresenceConfirmations>(());
    }

    /// Confirms presence for one day.
    #[instrument(skip(self))]
    pub fn confirm_presence(&self, user_id: u64, date: String, start_time: String, end_time: String) {
        debug!("dispatching");
        self.inner.dispatch_fetch::<ConfirmPresence>(ConfirmPresenceParams {
            user_id,
            date,
            start_time,
            end_time,
        });
    }
}
