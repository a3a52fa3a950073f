//! Type-safe wrappers around [`CollectionClient`](collection_framework::CollectionClient).

pub mod author_client;
pub mod post_client;

pub use author_client::*;
pub use post_client::*;
