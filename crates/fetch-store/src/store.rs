//! # Generic State Store
//!
//! This module defines the `StateStore`, the per-resource container that owns
//! a [`ResourceState`] and folds lifecycle events into it.
//!
//! # Architecture Note
//! This struct is the "server" half of the pattern. It owns the state and the
//! receiver end of the channel. Even with one store per resource running,
//! each store processes its own messages *sequentially* in a loop, so the
//! state needs no `Mutex` or `RwLock`: exclusive ownership within the task
//! gives safety, and the mpsc queue gives FIFO reduction order.
//!
//! # Ordering Caveat
//! FIFO holds for events *as enqueued*. Two overlapping fetches settle after
//! independently-timed network suspensions, so their `Success`/`Failure`
//! events can be enqueued out of issue order; the last one reduced wins, even
//! when it belongs to a superseded request. There is no generation fencing
//! and no cancellation. Callers who care must serialize their own fetches.

use crate::event::{LifecycleEvent, StoreMessage};
use crate::handle::StoreHandle;
use crate::reducer::reduce;
use crate::resource::StoreResource;
use crate::state::ResourceState;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The per-resource store task.
///
/// Created together with its [`StoreHandle`] via [`StateStore::new`], then
/// driven by spawning [`StateStore::run`]. The task ends when every handle
/// (and dispatcher holding one) has been dropped; nothing is persisted, a
/// fresh store starts over from `T::initial()`.
pub struct StateStore<T: StoreResource> {
    receiver: mpsc::Receiver<StoreMessage<T>>,
    state: ResourceState<T::Data>,
    published: watch::Sender<ResourceState<T::Data>>,
}

impl<T: StoreResource> StateStore<T> {
    /// Creates a store and its handle.
    ///
    /// # Arguments
    /// * `buffer_size` - capacity of the event queue. Dispatchers wait (or
    ///   fail fast on the synchronous path) when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreHandle<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let initial = ResourceState::new(T::initial());
        let (published, watched) = watch::channel(initial.clone());
        let store = Self {
            receiver,
            state: initial,
            published,
        };
        (store, StoreHandle::new(sender, watched))
    }

    /// Runs the store's event loop until the channel closes.
    ///
    /// Every reduced slice is published on the watch channel, so subscribed
    /// views observe each transition in order.
    pub async fn run(mut self) {
        let resource_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(resource_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreMessage::Reduce(event) => {
                    match &event {
                        LifecycleEvent::Request => debug!(resource_type, "Request"),
                        LifecycleEvent::Success(response) => {
                            debug!(resource_type, ?response, "Success")
                        }
                        LifecycleEvent::Failure(message) => {
                            warn!(resource_type, error = %message, "Failure")
                        }
                    }
                    self.state = reduce::<T>(&self.state, event);
                    // send_replace keeps publishing even with no subscribers
                    self.published.send_replace(self.state.clone());
                }
                StoreMessage::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.state.clone());
                }
            }
        }

        info!(resource_type, "Store shut down");
    }
}
