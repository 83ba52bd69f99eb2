//! # Resource Dispatcher
//!
//! The dispatcher orchestrates one network operation per invocation and
//! translates gateway outcomes into lifecycle events. Every action — list
//! fetch, single-entity mutate, create, delete — runs the same three-event
//! skeleton; only the endpoint and the shaping function differ, and both are
//! supplied by a [`FetchAction`] implementation.

use crate::error::StoreError;
use crate::event::LifecycleEvent;
use crate::gateway::{GatewayCall, RequestGateway};
use crate::handle::StoreHandle;
use crate::resource::StoreResource;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, warn};

/// Per-action configuration: the endpoint to hit and how to shape the raw
/// payload into the resource's typed response.
///
/// Implementors are zero-sized markers; one per resource+action pair. The
/// `Params` travel from the caller into both the URL/body builder and the
/// shaping function, which is how a mutation's response can carry the id of
/// the entity it targets.
pub trait FetchAction: Send + Sync + 'static {
    /// The resource whose store this action feeds.
    type Resource: StoreResource;
    /// Plain parameter object supplied by the caller (user id, year, value…).
    type Params: Clone + Send + Sync + Debug + 'static;

    /// Builds the outbound call for these parameters.
    fn call(params: &Self::Params) -> GatewayCall;

    /// Shapes a successful payload into the resource's response. A malformed
    /// payload returns the display message that becomes a `Failure` event.
    fn shape(
        params: &Self::Params,
        payload: Value,
    ) -> Result<<Self::Resource as StoreResource>::Response, String>;
}

/// Dispatcher bound to one store and one gateway.
///
/// Cheap to clone; fire-and-forget dispatches clone it into a spawned task.
pub struct ResourceDispatcher<T: StoreResource> {
    handle: StoreHandle<T>,
    gateway: Arc<dyn RequestGateway>,
}

impl<T: StoreResource> Clone for ResourceDispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            gateway: self.gateway.clone(),
        }
    }
}

impl<T: StoreResource> ResourceDispatcher<T> {
    pub fn new(handle: StoreHandle<T>, gateway: Arc<dyn RequestGateway>) -> Self {
        Self { handle, gateway }
    }

    /// The store handle this dispatcher writes into.
    pub fn handle(&self) -> &StoreHandle<T> {
        &self.handle
    }

    /// Fire-and-forget dispatch.
    ///
    /// The `Request` event is enqueued before this method returns, so
    /// `fetching` flips before any suspension; the settlement lands
    /// asynchronously. A closed or saturated store is logged, not raised:
    /// the view layer never observes an exception from a dispatch.
    pub fn dispatch_fetch<A>(&self, params: A::Params)
    where
        A: FetchAction<Resource = T>,
    {
        if let Err(e) = self.handle.dispatch_now(LifecycleEvent::Request) {
            warn!(error = %e, "dropping dispatch, store unavailable");
            return;
        }
        let this = self.clone();
        tokio::spawn(async move {
            if let Err(e) = this.settle::<A>(params).await {
                warn!(error = %e, "store closed before fetch settled");
            }
        });
    }

    /// Runs one full fetch cycle and returns once the settlement event has
    /// been enqueued. Tests and the demo binary use this awaitable form; the
    /// semantics are identical to [`Self::dispatch_fetch`].
    pub async fn run_fetch<A>(&self, params: A::Params) -> Result<(), StoreError>
    where
        A: FetchAction<Resource = T>,
    {
        self.handle.dispatch(LifecycleEvent::Request).await?;
        self.settle::<A>(params).await
    }

    /// Awaits the gateway, shapes the outcome, and enqueues the settlement.
    /// No retry: a failed fetch settles as `Failure` and waits for the user
    /// to dispatch again.
    async fn settle<A>(&self, params: A::Params) -> Result<(), StoreError>
    where
        A: FetchAction<Resource = T>,
    {
        let call = A::call(&params);
        debug!(?call, "gateway call");
        let event = match self.gateway.send(call).await {
            Ok(payload) => match A::shape(&params, payload) {
                Ok(response) => LifecycleEvent::Success(response),
                Err(message) => LifecycleEvent::Failure(message),
            },
            Err(e) => LifecycleEvent::Failure(e.to_string()),
        };
        self.handle.dispatch(event).await
    }
}
