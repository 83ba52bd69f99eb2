//! # Resource State
//!
//! The state slice every store owns for its resource: the `fetching` flag,
//! the last failure message, and the resource's current data.

/// The reduced client-side cache for one resource.
///
/// # Protocol
/// The fields are not mutually exclusive at the type level; the reducer
/// maintains the protocol instead:
/// - `error` is cleared whenever a new request starts.
/// - `fetching` is false once either `Success` or `Failure` has been reduced.
/// - `data` survives failures untouched, so views keep showing the last good
///   data instead of blanking out on a transient error.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<D> {
    /// True between a dispatched `Request` and its settlement.
    pub fetching: bool,
    /// Display message from the most recent failed fetch, if any.
    pub error: Option<String>,
    /// The resource's normalized data.
    pub data: D,
}

impl<D> ResourceState<D> {
    /// Creates the initial slice: not fetching, no error, the given data.
    pub fn new(data: D) -> Self {
        Self {
            fetching: false,
            error: None,
            data,
        }
    }
}

impl<D: Default> Default for ResourceState<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}
