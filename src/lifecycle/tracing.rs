//! # Observability & Tracing
//!
//! Structured logging with `tracing`. Verbosity comes from `RUST_LOG`; with it
//! unset only errors are shown.
//!
//! Logs are written to stderr so they never interleave with the prompts and the
//! receipt on stdout.
//!
//! ```bash
//! # Follow each line through the worker pool and the actor
//! RUST_LOG=debug cargo run 2> session.log
//! ```
//!
//! Worker logs carry an `order_worker{worker=.. item=..}` span, so the
//! fan-out can be followed even though confirmations arrive in any order.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
