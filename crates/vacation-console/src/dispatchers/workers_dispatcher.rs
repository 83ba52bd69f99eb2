//! # Workers Dispatcher
//!
//! High-level API for the workers store: roster fetch and per-worker
//! work-time change.

use crate::workers_store::{ChangeWorkTime, ChangeWorkTimeParams, FetchWorkers, Workers};
use fetch_store::{ResourceDispatcher, StoreHandle};
use tracing::{debug, instrument};

/// Dispatcher for the workers store.
#[derive(Clone)]
pub struct WorkersDispatcher {
    inner: ResourceDispatcher<Workers>,
}

impl WorkersDispatcher {
    pub fn new(inner: ResourceDispatcher<Workers>) -> Self {
        Self { inner }
    }

    /// The generic dispatcher, for awaited fetch cycles.
    pub fn inner(&self) -> &ResourceDispatcher<Workers> {
        &self.inner
    }

    /// The store handle views read from.
    pub fn handle(&self) -> &StoreHandle<Workers> {
        self.inner.handle()
    }

    /// Refreshes the whole roster.
    #[instrument(skip(self))]
    pub fn fetch_workers(&self) {
        debug!("dispatching");
        self.inner.dispatch_fetch::<FetchWorkers>(());
    }

    /// Changes one worker's contracted work time.
    #[instrument(skip(self))]
    pub fn change_work_time(&self, user_id: u64, value: f32) {
        debug!("dispatching");
        self.inner
            .dispatch_fetch::<ChangeWorkTime>(ChangeWorkTimeParams { user_id, value });
    }
}
