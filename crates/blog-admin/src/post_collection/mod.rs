//! Post-specific collection logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::PostClient;
use crate::model::Post;
use collection_framework::{ClientConfig, CollectionActor};

/// Creates a new, empty post collection and its client.
pub fn new(config: &ClientConfig) -> (CollectionActor<Post>, PostClient) {
    let (actor, generic_client) = CollectionActor::new(config.buffer_size);
    let client = PostClient::new(generic_client);

    (actor, client)
}
