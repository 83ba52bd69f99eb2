//! # Vacation Console
//!
//! Client-side state for a vacation/absence-management console, built on the
//! generic fetch-and-reduce engine in [`fetch_store`]. Each domain context —
//! absence history, presence confirmations, worker roster, acceptances,
//! vacation days — is one resource: a store task owning its
//! [`ResourceState`](fetch_store::ResourceState), a typed dispatcher, and a
//! normalization policy. The view layer is not part of this crate; views
//! consume store handles (snapshots + watch subscriptions) and dispatcher
//! methods only.
//!
//! ## Modules
//!
//! - [`model`] — plain domain data structures.
//! - [`absence_store`], [`presence_store`], [`workers_store`],
//!   [`acceptance_store`], [`vacation_days_store`] — per-resource
//!   configuration: marker type, response enum, merge policy, actions.
//! - [`dispatchers`] — the typed, fire-and-forget API views call.
//! - [`session`] — the explicit login/logout-scoped session object.
//! - [`lifecycle`] — the [`ConsoleSystem`](lifecycle::ConsoleSystem)
//!   orchestrator.

pub mod absence_store;
pub mod acceptance_store;
pub mod dispatchers;
pub mod lifecycle;
pub mod model;
pub mod presence_store;
pub mod session;
pub mod vacation_days_store;
pub mod workers_store;
