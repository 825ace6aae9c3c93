//! # Observability
//!
//! One-call setup for structured logs. Every actor logs its lifecycle and each
//! request with an `entity_type` field, so module targets are hidden to keep
//! lines short.
//!
//! ```bash
//! RUST_LOG=info cargo run          # state changes only
//! RUST_LOG=debug cargo run         # every request with its payload
//! RUST_LOG=shop=debug cargo run    # one crate only
//! ```
//!
//! Typical `info` output for adding an item to a cart:
//!
//! ```text
//! INFO Created entity_type="Cart" id=cart_1 size=1
//! INFO add_item{user_id=UserId(1) product_id=ProductId(1)}: Line added
//! INFO Updated entity_type="Cart" id=cart_1
//! ```

/// Installs a global `tracing-subscriber` driven by `RUST_LOG`.
///
/// Safe to call more than once: later calls leave the first subscriber in place,
/// which keeps it usable from tests.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
