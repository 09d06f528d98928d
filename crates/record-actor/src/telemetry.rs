//! Structured logging setup shared by binaries and tests.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Verbosity is controlled with `RUST_LOG`:
/// - `RUST_LOG=info` - lifecycle events (created, deleted, reserved)
/// - `RUST_LOG=debug` - every request with its payload
/// - `RUST_LOG=record_actor=debug,hotel_reservations=info` - per crate
///
/// Panics if a global subscriber is already installed. Use [`try_setup_tracing`] where
/// that can happen, e.g. in tests.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Like [`setup_tracing`], but leaves an already installed subscriber in place.
pub fn try_setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_test_writer()
        .try_init();
}
