//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for everything built on the
//! framework.
//!
//! ## What Gets Traced
//!
//! - **Collection lifecycle**: `Collection started`, `Loaded`, `Shutdown` with the final size
//! - **Operations**: Create, Update, Delete with `entity_type`, `id` and `size` fields
//! - **Remote calls**: method, URL and status of every gateway request (`debug`)
//! - **Failures**: `warn!` with the error for every rejected or failed operation
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per operation
//! RUST_LOG=debug cargo run     # payloads and HTTP status lines
//! RUST_LOG=collection_framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a home view activation followed by a delete reads:
//!
//! ```text
//! INFO Collection started entity_type="Post"
//! INFO Loaded entity_type="Post" size=100
//! INFO home_view:delete_post: Deleted entity_type="Post" id=7 size=99
//! ```

/// Installs a compact `tracing-subscriber` filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the collection already
        .compact()
        .init();
}
