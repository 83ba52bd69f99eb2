//! # Vacation Days Dispatcher

use crate::vacation_days_store::{FetchVacationDays, FetchVacationDaysParams, VacationDaysSummary};
use fetch_store::{ResourceDispatcher, StoreHandle};
use tracing::{debug, instrument};

/// Dispatcher for the vacation-days store.
#[derive(Clone)]
pub struct VacationDaysDispatcher {
    inner: ResourceDispatcher<VacationDaysSummary>,
}

impl VacationDaysDispatcher {
    pub fn new(inner: ResourceDispatcher<VacationDaysSummary>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &ResourceDispatcher<VacationDaysSummary> {
        &self.inner
    }

    pub fn handle(&self) -> &StoreHandle<VacationDaysSummary> {
        self.inner.handle()
    }

    /// Refreshes one worker's remaining vacation pool.
    #[instrument(skip(self))]
    pub fn fetch_vacation_days(&self, user_id: u64) {
        debug!("dispatching");
        self.inner
            .dispatch_fetch::<FetchVacationDays>(FetchVacationDaysParams { user_id });
    }
}
