//! # Test Gateways
//!
//! Two in-memory [`RequestGateway`](crate::gateway::RequestGateway)
//! implementations for testing dispatcher and store logic without any
//! transport:
//!
//! - [`MockGateway`] — an expectation queue in the fluent style: declare the
//!   calls you expect and the payloads (or rejections) to return, then
//!   `verify()` that everything was consumed. Settles immediately.
//! - [`ManualGateway`] — hands each in-flight call to the test as a
//!   [`PendingCall`], which the test resolves or rejects whenever it
//!   chooses. This is how overlapping fetches are forced to settle out of
//!   issue order.
//!
//! ## Example
//! ```ignore
//! let gateway = Arc::new(MockGateway::new());
//! gateway
//!     .expect(GatewayCall::get("/api/v2/users"))
//!     .return_ok(json!([{"userId": 1, "name": "Alice", ...}]));
//!
//! let dispatcher = ResourceDispatcher::new(handle, gateway.clone());
//! dispatcher.run_fetch::<FetchWorkers>(()).await?;
//! gateway.verify();
//! ```

use crate::gateway::{GatewayCall, GatewayError, RequestGateway};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION-QUEUE GATEWAY
// =============================================================================

struct Expectation {
    call: GatewayCall,
    outcome: Result<Value, GatewayError>,
}

/// A gateway that replays a queue of expected calls and canned outcomes.
///
/// Calls are matched in order. An unexpected call, or a call that does not
/// match the expected method/URL/body, panics: that is a broken test or a
/// broken dispatcher, not a runtime condition.
#[derive(Default)]
pub struct MockGateway {
    expectations: Mutex<VecDeque<Expectation>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects `call` as the next gateway invocation.
    pub fn expect(&self, call: GatewayCall) -> ExpectationBuilder<'_> {
        ExpectationBuilder {
            call,
            expectations: &self.expectations,
        }
    }

    /// Panics if any declared expectation was never consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all gateway expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder binding an expected call to its canned outcome.
pub struct ExpectationBuilder<'a> {
    call: GatewayCall,
    expectations: &'a Mutex<VecDeque<Expectation>>,
}

impl ExpectationBuilder<'_> {
    /// The call resolves with `payload`.
    pub fn return_ok(self, payload: Value) {
        self.push(Ok(payload));
    }

    /// The call rejects with `message`.
    pub fn return_err(self, message: impl Into<String>) {
        self.push(Err(GatewayError::new(message)));
    }

    fn push(self, outcome: Result<Value, GatewayError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            call: self.call,
            outcome,
        });
    }
}

#[async_trait]
impl RequestGateway for MockGateway {
    async fn send(&self, call: GatewayCall) -> Result<Value, GatewayError> {
        let expectation = {
            let mut exps = self.expectations.lock().unwrap();
            exps.pop_front()
        };
        match expectation {
            Some(expected) => {
                assert_eq!(
                    expected.call, call,
                    "gateway received a call that does not match the next expectation"
                );
                expected.outcome
            }
            None => panic!("unexpected gateway call: {call:?}"),
        }
    }
}

// =============================================================================
// MANUALLY-SETTLED GATEWAY
// =============================================================================

/// One in-flight call surrendered to the test for manual settlement.
#[derive(Debug)]
pub struct PendingCall {
    pub call: GatewayCall,
    respond_to: oneshot::Sender<Result<Value, GatewayError>>,
}

impl PendingCall {
    /// Settles the call successfully with `payload`.
    pub fn resolve(self, payload: Value) {
        let _ = self.respond_to.send(Ok(payload));
    }

    /// Settles the call with a rejection.
    pub fn reject(self, message: impl Into<String>) {
        let _ = self.respond_to.send(Err(GatewayError::new(message)));
    }
}

/// A gateway whose calls suspend until the test settles them.
pub struct ManualGateway {
    pending: mpsc::UnboundedSender<PendingCall>,
}

impl ManualGateway {
    /// Creates the gateway and the receiver the test pulls [`PendingCall`]s
    /// from, in the order the dispatchers issued them.
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<PendingCall>) {
        let (pending, calls) = mpsc::unbounded_channel();
        (Arc::new(Self { pending }), calls)
    }
}

#[async_trait]
impl RequestGateway for ManualGateway {
    async fn send(&self, call: GatewayCall) -> Result<Value, GatewayError> {
        let (respond_to, settled) = oneshot::channel();
        self.pending
            .send(PendingCall { call, respond_to })
            .map_err(|_| GatewayError::new("gateway receiver dropped"))?;
        settled
            .await
            .unwrap_or_else(|_| Err(GatewayError::new("pending call dropped unsettled")))
    }
}
