//! # Framework Errors
//!
//! Plumbing errors for the store/dispatcher wiring. Domain-level fetch
//! failures never appear here: they collapse into the `Failure` lifecycle
//! event and land in `ResourceState::error` as display text.

/// Errors raised by the store plumbing itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Store queue full")]
    QueueFull,
}
