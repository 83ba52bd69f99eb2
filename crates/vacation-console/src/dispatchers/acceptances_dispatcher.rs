//! # Acceptances Dispatcher

use crate::acceptance_store::{
    Acceptances, FetchAcceptances, ResolveAcceptance, ResolveAcceptanceParams,
};
use crate::model::AcceptanceStatus;
use fetch_store::{ResourceDispatcher, StoreHandle};
use tracing::{debug, instrument};

/// Dispatcher for the acceptances store.
#[derive(Clone)]
pub struct AcceptancesDispatcher {
    inner: ResourceDispatcher<Acceptances>,
}

impl AcceptancesDispatcher {
    pub fn new(inner: ResourceDispatcher<Acceptances>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &ResourceDispatcher<Acceptances> {
        &self.inner
    }

    pub fn handle(&self) -> &StoreHandle<Acceptances> {
        self.inner.handle()
    }

    /// Refreshes the approver's queue.
    #[instrument(skip(self))]
    pub fn fetch_acceptances(&self) {
        debug!("dispatching");
        self.inner.dispatch_fetch::<FetchAcceptances>(());
    }

    /// Accepts one request.
    #[instrument(skip(self))]
    pub fn accept(&self, acceptance_id: u64) {
        self.resolve(acceptance_id, AcceptanceStatus::Accepted);
    }

    /// Rejects one request.
    #[instrument(skip(self))]
    pub fn reject(&self, acceptance_id: u64) {
        self.resolve(acceptance_id, AcceptanceStatus::Rejected);
    }

    fn resolve(&self, acceptance_id: u64, status: AcceptanceStatus) {
        debug!(acceptance_id, ?status, "dispatching");
        self.inner.dispatch_fetch::<ResolveAcceptance>(ResolveAcceptanceParams {
            acceptance_id,
            status,
        });
    }
}
