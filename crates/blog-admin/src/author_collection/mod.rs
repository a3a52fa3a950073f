//! # Author Collection
//!
//! The reconciled list of authors (`/users`) for one view.
//!
//! ## Structure
//!
//! - [`entity`] - [`CollectionEntity`](collection_framework::CollectionEntity) implementation for [`Author`] and its form rules
//! - [`error`] - [`AuthorError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blog_admin::author_collection;
//! use blog_admin::model::NewAuthor;
//! use collection_framework::{ClientConfig, CollectionHandle, HttpGateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default();
//!     let (actor, client) = author_collection::new(&config);
//!     tokio::spawn(actor.run(HttpGateway::new(&config)?));
//!
//!     client.load_all().await?;
//!     let author = client
//!         .create_author(NewAuthor {
//!             name: "Ada Lovelace".to_string(),
//!             username: "ada".to_string(),
//!             email: "ada@example.com".to_string(),
//!             website: None,
//!         })
//!         .await?;
//!     println!("created {}", author.id);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::AuthorClient;
use crate::model::Author;
use collection_framework::{ClientConfig, CollectionActor};

/// Creates a new, empty author collection and its client.
pub fn new(config: &ClientConfig) -> (CollectionActor<Author>, AuthorClient) {
    let (actor, generic_client) = CollectionActor::new(config.buffer_size);
    let client = AuthorClient::new(generic_client);

    (actor, client)
}
