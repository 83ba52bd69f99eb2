//! # Console Lifecycle & Orchestration
//!
//! This module wires the whole console: one store task per resource, all
//! dispatching through one shared gateway, created together on login and
//! torn down together when the console closes.
//!
//! ## The Orchestration Pattern
//!
//! 1. **Store creation** — each resource's factory builds its store and
//!    typed dispatcher against the shared gateway.
//! 2. **Task spawning** — every store runs its event loop in its own Tokio
//!    task; the handles are kept for graceful shutdown.
//! 3. **Session scoping** — the system owns the [`Session`] for its
//!    lifetime and clears it on shutdown. Nothing survives the teardown: a
//!    fresh console re-fetches every resource from zero state.
//!
//! ## Graceful Shutdown
//!
//! Dropping the dispatchers closes each store's queue; the store loops
//! drain what is left and exit; `shutdown` then awaits every task. In-flight
//! gateway calls settle into closed queues and are logged, not raised.

use crate::dispatchers::{
    AbsenceHistoryDispatcher, AcceptancesDispatcher, PresenceDispatcher, VacationDaysDispatcher,
    WorkersDispatcher,
};
use crate::session::Session;
use crate::{absence_store, acceptance_store, presence_store, vacation_days_store, workers_store};
use fetch_store::RequestGateway;
use std::sync::Arc;
use tracing::{error, info};

/// The running console: five stores, five dispatchers, one session.
pub struct ConsoleSystem {
    pub absence_history: AbsenceHistoryDispatcher,
    pub presence: PresenceDispatcher,
    pub workers: WorkersDispatcher,
    pub acceptances: AcceptancesDispatcher,
    pub vacation_days: VacationDaysDispatcher,
    session: Session,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ConsoleSystem {
    /// Builds every store against the shared gateway and spawns their tasks.
    ///
    /// The caller supplies an already-initialized session; the system owns
    /// it from here and clears it on shutdown.
    pub fn new(session: Session, gateway: Arc<dyn RequestGateway>) -> Self {
        let (absence_store, absence_history) = absence_store::new(gateway.clone());
        let (presence_store, presence) = presence_store::new(gateway.clone());
        let (workers_store, workers) = workers_store::new(gateway.clone());
        let (acceptance_store, acceptances) = acceptance_store::new(gateway.clone());
        let (vacation_days_store, vacation_days) = vacation_days_store::new(gateway);

        let handles = vec![
            tokio::spawn(absence_store.run()),
            tokio::spawn(presence_store.run()),
            tokio::spawn(workers_store.run()),
            tokio::spawn(acceptance_store.run()),
            tokio::spawn(vacation_days_store.run()),
        ];

        info!(stores = handles.len(), "console started");

        Self {
            absence_history,
            presence,
            workers,
            acceptances,
            vacation_days,
            session,
            handles,
        }
    }

    /// The session this console runs under.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Clears the session, closes every store, and awaits their tasks.
    pub async fn shutdown(mut self) -> Result<(), String> {
        info!("shutting down console");
        self.session.log_out();

        // Dropping the dispatchers closes the stores' queues.
        drop(self.absence_history);
        drop(self.presence);
        drop(self.workers);
        drop(self.acceptances);
        drop(self.vacation_days);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("store task failed: {e:?}");
                return Err(format!("store task failed: {e:?}"));
            }
        }

        info!("console shutdown complete");
        Ok(())
    }
}
