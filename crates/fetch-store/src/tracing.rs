//! Tracing setup for binaries and tests.

/// Initializes structured logging with environment-based filtering.
///
/// Set `RUST_LOG` to control verbosity:
/// - `RUST_LOG=info` - store lifecycle and settlements
/// - `RUST_LOG=debug` - full events and gateway calls
/// - `RUST_LOG=fetch_store=debug` - debug only for this crate
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
