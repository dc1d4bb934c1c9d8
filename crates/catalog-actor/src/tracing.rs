//! # Observability & Tracing
//!
//! Structured logging for catalog actors and everything built on them.
//!
//! Actors log their lifecycle and every state change with structured fields
//! (`collection`, `key`, `size`) rather than formatted strings, so log lines stay short and
//! can be filtered. Payloads (raw forms, events) are only logged at `debug`.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # state changes only
//! RUST_LOG=debug cargo run     # plus payloads and reads
//! ```
//!
//! With `RUST_LOG=info` an add/remove cycle looks like:
//!
//! ```text
//! INFO Actor started collection="restaurants"
//! INFO Added collection="restaurants" key=r_3f2a... size=3
//! INFO Removed collection="restaurants" key=r_3f2a...
//! ```

/// Initializes the global tracing subscriber.
///
/// Filtering comes from `RUST_LOG`. Module paths are hidden (`with_target(false)`) since
/// every event already names its collection or workflow.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
