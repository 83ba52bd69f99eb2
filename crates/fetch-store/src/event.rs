//! # Lifecycle Events & Store Messages
//!
//! This module defines the generic message types flowing into a
//! [`StateStore`](crate::store::StateStore): the three-phase fetch lifecycle
//! events and the snapshot query.

use crate::resource::StoreResource;
use crate::state::ResourceState;
use tokio::sync::oneshot;

/// One phase of an in-flight fetch for a single resource.
///
/// The set is closed on purpose: the original console routed stringly-typed
/// action names through a shared dispatch surface and threw at runtime on an
/// unhandled type. Here an unhandled event is unrepresentable; the reducer's
/// `match` is checked for exhaustiveness at compile time.
#[derive(Debug)]
pub enum LifecycleEvent<T: StoreResource> {
    /// A fetch was issued. Reduces to `fetching=true, error=None`.
    Request,
    /// The gateway settled successfully and the payload was shaped into the
    /// resource's typed response. Reduces to `fetching=false` and merged data.
    Success(T::Response),
    /// The gateway rejected, or the payload was malformed. Carries the
    /// display message that lands in `ResourceState::error`.
    Failure(String),
}

/// Reply channel for snapshot queries.
pub type SnapshotReply<T> = oneshot::Sender<ResourceState<<T as StoreResource>::Data>>;

/// Internal message type sent to a store over its FIFO queue.
///
/// Events and snapshots share one queue, so a snapshot observes every event
/// enqueued before it.
#[derive(Debug)]
pub enum StoreMessage<T: StoreResource> {
    /// Fold a lifecycle event into the state.
    Reduce(LifecycleEvent<T>),
    /// Reply with a copy of the current state.
    Snapshot { respond_to: SnapshotReply<T> },
}
