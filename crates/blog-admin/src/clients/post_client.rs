//! # Post Client
//!
//! Provides a high‑level API for the post collection.
//! It wraps a `CollectionClient<Post>` and exposes the post forms and the by-author load.
use crate::model::{AuthorId, NewPost, Post, PostId, PostUpdate};
use crate::post_collection::PostError;
use async_trait::async_trait;
use collection_framework::{CollectionClient, CollectionHandle, FrameworkError, ListQuery};
use tracing::{debug, instrument};

/// Client for interacting with a post collection.
#[derive(Clone)]
pub struct PostClient {
    inner: CollectionClient<Post>,
}

impl PostClient {
    pub fn new(inner: CollectionClient<Post>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CollectionHandle<Post> for PostClient {
    type Error = PostError;

    fn inner(&self) -> &CollectionClient<Post> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        PostError::from(e)
    }
}

impl PostClient {
    /// Seeds the collection with one author's posts (`GET /posts?userId={id}`).
    #[instrument(skip(self))]
    pub async fn load_by_author(&self, author: AuthorId) -> Result<usize, PostError> {
        debug!("Sending request");
        self.inner
            .load(ListQuery::by("userId", author))
            .await
            .map_err(PostError::from)
    }

    /// Submits the add-post form. The new post is listed first.
    #[instrument(skip(self))]
    pub async fn create_post(&self, params: NewPost) -> Result<Post, PostError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(PostError::from)
    }

    /// Submits the edit-post form and returns the merged post.
    #[instrument(skip(self))]
    pub async fn update_post(&self, id: PostId, update: PostUpdate) -> Result<Post, PostError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(PostError::from)
    }

    /// The loaded posts, or an empty list while loading.
    pub async fn posts(&self) -> Result<Vec<Post>, PostError> {
        Ok(self.snapshot().await?.unwrap_or_default())
    }
}
