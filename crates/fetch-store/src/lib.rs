//! # Fetch Store
//!
//! This crate provides the building blocks for the console's client-side
//! caches: a generic, type-safe **fetch-and-reduce** engine. Every domain
//! resource (workers, absence history, presence confirmations, …) runs the
//! identical machinery and differs only in configuration.
//!
//! ## The Pattern
//!
//! One fetch cycle is three lifecycle events folded by one pure reducer:
//!
//! 1. A view calls a dispatcher. The dispatcher enqueues `Request` before
//!    anything can suspend, so `fetching` flips immediately.
//! 2. The dispatcher awaits the [`RequestGateway`] — the only suspension
//!    point in the core.
//! 3. The settlement is shaped and enqueued as `Success(response)` or
//!    `Failure(message)`; the store reduces it and publishes the new slice;
//!    subscribed views re-render.
//!
//! ## Core Abstractions
//!
//! - [`StoreResource`] — per-resource configuration: the cached data shape,
//!   the typed response enum, and the normalization policy (`merge`).
//! - [`reduce`] — the single pure reducer shared by every resource.
//! - [`StateStore`] / [`StoreHandle`] — the owning task and its interface.
//!   One store per resource; state is owned exclusively by the task and
//!   mutated only via reduced events, so no locks are needed, and the mpsc
//!   queue gives FIFO reduction order.
//! - [`ResourceDispatcher`] / [`FetchAction`] — the three-event skeleton
//!   plus per-action endpoint and shaping configuration.
//! - [`RequestGateway`] — the opaque request/response collaborator. No
//!   transport lives in this crate; tests use the doubles in [`mock`].
//!
//! ## Example
//!
//! ```rust
//! use fetch_store::{
//!     FetchAction, GatewayCall, MockGateway, ResourceDispatcher, StateStore, StoreResource,
//! };
//! use serde_json::{json, Value};
//! use std::sync::Arc;
//!
//! // 1. Define the resource: data shape + typed response + merge policy.
//! #[derive(Debug)]
//! enum NotesResponse {
//!     Listed(Vec<String>),
//! }
//!
//! struct Notes;
//!
//! impl StoreResource for Notes {
//!     type Data = Vec<String>;
//!     type Response = NotesResponse;
//!
//!     fn initial() -> Vec<String> {
//!         Vec::new()
//!     }
//!
//!     fn merge(_data: &Vec<String>, response: NotesResponse) -> Vec<String> {
//!         match response {
//!             NotesResponse::Listed(notes) => notes,
//!         }
//!     }
//! }
//!
//! // 2. Define an action: endpoint + shaping function.
//! struct FetchNotes;
//!
//! impl FetchAction for FetchNotes {
//!     type Resource = Notes;
//!     type Params = ();
//!
//!     fn call(_: &()) -> GatewayCall {
//!         GatewayCall::get("/api/notes")
//!     }
//!
//!     fn shape(_: &(), payload: Value) -> Result<NotesResponse, String> {
//!         serde_json::from_value(payload)
//!             .map(NotesResponse::Listed)
//!             .map_err(|e| e.to_string())
//!     }
//! }
//!
//! // 3. Wire store + dispatcher and run a cycle.
//! #[tokio::main]
//! async fn main() {
//!     let gateway = Arc::new(MockGateway::new());
//!     gateway
//!         .expect(GatewayCall::get("/api/notes"))
//!         .return_ok(json!(["hello"]));
//!
//!     let (store, handle) = StateStore::<Notes>::new(16);
//!     tokio::spawn(store.run());
//!
//!     let dispatcher = ResourceDispatcher::new(handle, gateway.clone());
//!     dispatcher.run_fetch::<FetchNotes>(()).await.unwrap();
//!
//!     let state = dispatcher.handle().snapshot().await.unwrap();
//!     assert!(!state.fetching);
//!     assert_eq!(state.data, vec!["hello".to_string()]);
//!     gateway.verify();
//! }
//! ```
//!
//! ## Concurrency Model & Known Race
//!
//! - Each store runs in its own Tokio task and reduces events sequentially.
//! - Dispatchers only ever produce events; nothing mutates state directly.
//! - Overlapping fetches for the same resource settle after independent
//!   network suspensions, so their settlements can arrive out of issue
//!   order; the last one reduced wins, stale or not. There is no generation
//!   fencing and no cancellation — see the store docs.
//!
//! ## Error Model
//!
//! Gateway rejections and malformed payloads collapse into the `Failure`
//! event's display string; they never throw past the reducer into a view.
//! [`StoreError`] covers only wiring faults (closed or saturated stores).

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod gateway;
pub mod handle;
pub mod mock;
pub mod normalize;
pub mod reducer;
pub mod resource;
pub mod state;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use dispatcher::{FetchAction, ResourceDispatcher};
pub use error::StoreError;
pub use event::{LifecycleEvent, SnapshotReply, StoreMessage};
pub use gateway::{GatewayCall, GatewayError, Method, RequestGateway};
pub use handle::StoreHandle;
pub use mock::{ManualGateway, MockGateway, PendingCall};
pub use reducer::reduce;
pub use resource::StoreResource;
pub use state::ResourceState;
pub use store::StateStore;
