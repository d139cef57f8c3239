//! # Observability & Tracing
//!
//! Structured logging through `tracing`, filtered by the `RUST_LOG` environment variable.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and one line per stored change
//! RUST_LOG=debug cargo run    # also request payloads and lookups
//! ```
//!
//! With `RUST_LOG=info` a create/update/delete sequence looks like:
//!
//! ```text
//! INFO Actor started entity_type="Order" next_id=Some(1001)
//! INFO Created entity_type="Order" id=1001 size=1
//! INFO create_order: Order created order_id=1001
//! INFO Updated entity_type="Order" id=1001
//! INFO Deleted entity_type="Order" id=1001 size=0
//! INFO Shutdown entity_type="Order" size=0
//! ```
//!
//! Rejected payloads are logged at `warn` with the full violation list.

/// Installs the global subscriber: env filter, no module targets, compact span prefixes.
///
/// Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
