//! # StoreResource Trait
//!
//! The `StoreResource` trait is the contract every resource (workers, absence
//! history, presence confirmations, …) implements to be managed by the generic
//! [`StateStore`](crate::store::StateStore). It declares the shape of the
//! cached data, the typed response enum the resource's fetch actions produce,
//! and the normalization policy that folds a response into the cache.
//!
//! # Architecture Note
//! By defining this contract once, the store event loop, the reducer, and the
//! dispatcher skeleton are written a single time and reused for every
//! resource. Adding a resource means supplying data + response types and a
//! `merge` — never a new state machine.

use std::fmt::Debug;

/// Contract for a resource managed by a [`StateStore`](crate::store::StateStore).
///
/// Implementors are usually zero-sized marker types; the interesting parts
/// are the associated types and the `merge` policy.
///
/// # Normalization policies
/// `merge` expresses one of three shapes, typically by matching on the
/// resource's `Response` enum:
/// - **Replace** — the response becomes the new data wholesale.
/// - **KeyedMerge** — the response list is rebuilt into a mapping keyed by a
///   natural key (see [`crate::normalize::keyed_by`]); keys missing from the
///   response disappear, so server-side deletions propagate.
/// - **TargetedMutation** — one entity, located by an id carried in the
///   response variant, is patched; everything else is untouched (see
///   [`crate::normalize::patch_entity`]).
pub trait StoreResource: Send + Sync + 'static {
    /// The normalized client-side cache for this resource.
    type Data: Clone + PartialEq + Debug + Send + Sync + 'static;

    /// Typed, shaped outcome of a successful fetch. One enum per resource,
    /// with one variant per action, so the reducer's match is exhaustive.
    type Response: Debug + Send + 'static;

    /// The data a fresh store starts with (empty list, empty map, …).
    fn initial() -> Self::Data;

    /// Folds a shaped response into the current data. Pure; must not carry
    /// side effects. The input is borrowed and never mutated.
    fn merge(data: &Self::Data, response: Self::Response) -> Self::Data;
}
