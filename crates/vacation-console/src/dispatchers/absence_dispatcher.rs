//! # Absence History Dispatcher

use crate::absence_store::{AbsenceHistory, FetchAbsenceHistory, FetchAbsenceHistoryParams};
use fetch_store::{ResourceDispatcher, StoreHandle};
use tracing::{debug, instrument};

/// Dispatcher for the absence-history store.
#[derive(Clone)]
pub struct AbsenceHistoryDispatcher {
    inner: ResourceDispatcher<AbsenceHistory>,
}

impl AbsenceHistoryDispatcher {
    pub fn new(inner: ResourceDispatcher<AbsenceHistory>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &ResourceDispatcher<AbsenceHistory> {
        &self.inner
    }

    pub fn handle(&self) -> &StoreHandle<AbsenceHistory> {
        self.inner.handle()
    }

    /// Refreshes one worker's absence log for a year.
    #[instrument(skip(self))]
    pub fn fetch_absence_history(&self, user_id: u64, year: i32) {
        debug!("dispatching");
        self.inner
            .dispatch_fetch::<FetchAbsenceHistory>(FetchAbsenceHistoryParams { user_id, year });
    }
}
