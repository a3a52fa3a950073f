//! Record shapes of the blog API, implementing [`CollectionEntity`](collection_framework::CollectionEntity)
//! in the `*_collection` modules.

pub mod author;
pub mod post;

pub use author::*;
pub use post::*;
