//! # The Generic Reducer
//!
//! One pure reducer serves every resource. The original console duplicated
//! this three-arm switch per resource action; here it is written once and
//! parameterized by the resource's [`merge`](crate::resource::StoreResource::merge)
//! normalization policy.

use crate::event::LifecycleEvent;
use crate::resource::StoreResource;
use crate::state::ResourceState;

/// Folds one lifecycle event into a state slice, returning the next slice.
///
/// Pure: no side effects, the input state is never mutated.
///
/// Transitions:
/// - `Request` — `fetching=true`, `error` cleared, data untouched.
/// - `Success` — `fetching=false`, data replaced by `T::merge`; the prior
///   `error` is left as-is (only a new request clears it).
/// - `Failure` — `fetching=false`, `error` set, data untouched so the last
///   good data keeps rendering.
pub fn reduce<T: StoreResource>(
    state: &ResourceState<T::Data>,
    event: LifecycleEvent<T>,
) -> ResourceState<T::Data> {
    match event {
        LifecycleEvent::Request => ResourceState {
            fetching: true,
            error: None,
            data: state.data.clone(),
        },
        LifecycleEvent::Success(response) => ResourceState {
            fetching: false,
            error: state.error.clone(),
            data: T::merge(&state.data, response),
        },
        LifecycleEvent::Failure(message) => ResourceState {
            fetching: false,
            error: Some(message),
            data: state.data.clone(),
        },
    }
}
