//! # Observability
//!
//! Structured logging for the action layer and the store.
//!
//! ## What Gets Logged
//!
//! - **Endpoints**: every built URL at `debug`, with its logical resource
//! - **Requests**: one span per HTTP call, carrying the endpoint
//! - **Outcomes**: `debug` for a settled fetch, `warn` for a failed one
//! - **Store**: startup, every reduced action kind, shutdown with a count
//!
//! ```bash
//! # Outcomes and lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Endpoints, requests and reduced actions
//! RUST_LOG=portland_pour=debug cargo run
//! ```

/// Initializes the tracing subscriber.
///
/// Verbosity comes from `RUST_LOG`. Module paths are hidden and spans are
/// printed inline, so a request line reads like
/// `fetch_users:get: Sending request endpoint=...`.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
