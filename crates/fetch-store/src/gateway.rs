//! # RequestGateway Contract
//!
//! The network collaborator the dispatcher talks to. The core does not own a
//! transport; it only requires this contract: a call goes out, a parsed JSON
//! payload comes back, or a rejection with a display message. Production
//! wiring supplies an HTTP-backed implementation; tests supply the doubles
//! from [`crate::mock`].

use async_trait::async_trait;
use serde_json::Value;

/// HTTP-ish verbs the console's endpoints use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
}

/// One outbound request: verb, URL, and an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayCall {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl GatewayCall {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn put(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            url: url.into(),
            body: Some(body),
        }
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            url: url.into(),
            body: None,
        }
    }
}

/// A rejected gateway outcome.
///
/// Timeouts, non-2xx statuses and unreachable hosts all surface the same
/// way: a human-readable message. The dispatcher folds every one of them
/// into the `Failure` lifecycle event without distinguishing subtypes.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The request/response collaborator contract.
#[async_trait]
pub trait RequestGateway: Send + Sync {
    /// Performs one call, resolving with the parsed payload or rejecting
    /// with a message.
    async fn send(&self, call: GatewayCall) -> Result<Value, GatewayError>;
}
