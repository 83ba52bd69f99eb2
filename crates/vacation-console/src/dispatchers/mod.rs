//! # Typed Dispatchers
//!
//! Thin, resource-specific wrappers over the generic
//! [`ResourceDispatcher`](fetch_store::ResourceDispatcher). Views call these
//! with plain parameters (`user_id`, `year`, `value`, …) and never see
//! lifecycle events; effects land asynchronously in the resource's store.

pub mod absence_dispatcher;
pub mod acceptances_dispatcher;
pub mod presence_dispatcher;
pub mod vacation_days_dispatcher;
pub mod workers_dispatcher;

pub use absence_dispatcher::AbsenceHistoryDispatcher;
pub use acceptances_dispatcher::AcceptancesDispatcher;
pub use presence_dispatcher::PresenceDispatcher;
pub use vacation_days_dispatcher::VacationDaysDispatcher;
pub use workers_dispatcher::WorkersDispatcher;
