//! Demo entry point: wires a [`ConsoleSystem`] against a canned gateway,
//! logs in, runs a few fetch cycles, and logs the resulting state slices.
//!
//! The real console plugs an HTTP-backed [`RequestGateway`] implementation
//! in here; the core treats the transport as an opaque collaborator either
//! way.
//!
//! ```bash
//! RUST_LOG=info cargo run      # store lifecycle and settlements
//! RUST_LOG=debug cargo run     # full events and gateway calls
//! ```

use fetch_store::tracing::setup_tracing;
use fetch_store::{GatewayCall, MockGateway};
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use vacation_console::lifecycle::ConsoleSystem;
use vacation_console::presence_store::FetchMyPresenceConfirmations;
use vacation_console::session::Session;
use vacation_console::workers_store::{ChangeWorkTime, ChangeWorkTimeParams, FetchWorkers};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("starting vacation console demo");

    let gateway = Arc::new(MockGateway::new());
    gateway.expect(GatewayCall::get("/api/v2/users")).return_ok(json!([
        { "userId": 1, "name": "Alice Nowak", "mailAddress": "alice@example.com", "workTime": 8.0 },
        { "userId": 2, "name": "Bob Kowalski", "mailAddress": "bob@example.com", "workTime": 8.0 },
    ]));
    gateway
        .expect(GatewayCall::put("/api/v2/users/2/work-time", json!({ "value": 4.0 })))
        .return_ok(json!(4.0));
    gateway
        .expect(GatewayCall::get("/api/v2/presence-confirmations/me"))
        .return_ok(json!([
            { "date": "2021-08-19", "startTime": "08:00", "endTime": "16:00", "userId": 1 },
            { "date": "2021-08-20", "startTime": "08:00", "endTime": "16:00", "userId": 1 },
        ]));

    let mut session = Session::logged_out();
    session.log_in("demo-token", 1);

    let system = ConsoleSystem::new(session, gateway.clone());

    // Roster fetch, then a work-time change for one worker.
    system
        .workers
        .inner()
        .run_fetch::<FetchWorkers>(())
        .await
        .map_err(|e| e.to_string())?;
    system
        .workers
        .inner()
        .run_fetch::<ChangeWorkTime>(ChangeWorkTimeParams {
            user_id: 2,
            value: 4.0,
        })
        .await
        .map_err(|e| e.to_string())?;

    let workers = system.workers.handle().snapshot().await.map_err(|e| e.to_string())?;
    info!(count = workers.data.len(), "workers loaded");
    for worker in &workers.data {
        info!(worker.user_id, %worker.name, worker.work_time, "worker");
    }

    // Presence confirmations, keyed by date.
    system
        .presence
        .inner()
        .run_fetch::<FetchMyPresenceConfirmations>(())
        .await
        .map_err(|e| e.to_string())?;
    let presence = system.presence.handle().snapshot().await.map_err(|e| e.to_string())?;
    info!(days = presence.data.len(), "presence confirmations loaded");

    gateway.verify();

    system.shutdown().await?;

    info!("demo finished");
    Ok(())
}
