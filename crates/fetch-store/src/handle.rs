//! # Store Handle
//!
//! The cheap-to-clone interface to a running [`StateStore`](crate::store::StateStore).
//! Dispatchers write through it (events only, never direct mutation); views
//! read through it (snapshots and the watch subscription).

use crate::error::StoreError;
use crate::event::{LifecycleEvent, StoreMessage};
use crate::resource::StoreResource;
use crate::state::ResourceState;
use tokio::sync::{mpsc, oneshot, watch};

/// Handle to a resource's store.
///
/// Holds only channel ends, so cloning is inexpensive. When the last handle
/// is dropped the store's queue closes and its task shuts down.
pub struct StoreHandle<T: StoreResource> {
    sender: mpsc::Sender<StoreMessage<T>>,
    watched: watch::Receiver<ResourceState<T::Data>>,
}

impl<T: StoreResource> Clone for StoreHandle<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            watched: self.watched.clone(),
        }
    }
}

impl<T: StoreResource> StoreHandle<T> {
    pub(crate) fn new(
        sender: mpsc::Sender<StoreMessage<T>>,
        watched: watch::Receiver<ResourceState<T::Data>>,
    ) -> Self {
        Self { sender, watched }
    }

    /// Enqueues a lifecycle event, waiting for queue space if needed.
    pub async fn dispatch(&self, event: LifecycleEvent<T>) -> Result<(), StoreError> {
        self.sender
            .send(StoreMessage::Reduce(event))
            .await
            .map_err(|_| StoreError::StoreClosed)
    }

    /// Enqueues a lifecycle event without suspending.
    ///
    /// Used for the `Request` phase, which must be in the queue before the
    /// dispatcher's gateway call can suspend.
    pub fn dispatch_now(&self, event: LifecycleEvent<T>) -> Result<(), StoreError> {
        self.sender
            .try_send(StoreMessage::Reduce(event))
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => StoreError::QueueFull,
                mpsc::error::TrySendError::Closed(_) => StoreError::StoreClosed,
            })
    }

    /// Returns a copy of the state after every previously enqueued event has
    /// been reduced (the snapshot query travels the same FIFO queue).
    pub async fn snapshot(&self) -> Result<ResourceState<T::Data>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreMessage::Snapshot { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    /// Subscribes to state transitions. Views hold the receiver and re-render
    /// whenever it changes.
    pub fn subscribe(&self) -> watch::Receiver<ResourceState<T::Data>> {
        self.watched.clone()
    }

    /// Returns the most recently published slice without queue coordination.
    pub fn current(&self) -> ResourceState<T::Data> {
        self.watched.borrow().clone()
    }
}
