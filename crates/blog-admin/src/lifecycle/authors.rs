use super::{join_collections, spawn_collection, ViewError};
use crate::clients::{AuthorClient, PostClient};
use crate::model::{Author, AuthorId, AuthorUpdate, NewAuthor};
use crate::stats::{self, AuthorRow};
use crate::{author_collection, post_collection};
use collection_framework::{ClientConfig, CollectionHandle};
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// The authors table: each author with their post count, plus the author forms.
///
/// Posts are loaded only for counting and are never changed here.
pub struct AuthorsView {
    authors: AuthorClient,
    posts: PostClient,
    handles: Vec<JoinHandle<()>>,
}

impl AuthorsView {
    #[instrument(name = "authors_view", skip_all)]
    pub async fn activate(config: &ClientConfig) -> Result<Self, ViewError> {
        let (author_actor, authors) = author_collection::new(config);
        let (post_actor, posts) = post_collection::new(config);
        let handles = vec![
            spawn_collection(author_actor, config)?,
            spawn_collection(post_actor, config)?,
        ];

        let (author_load, post_load) = tokio::join!(authors.load_all(), posts.load_all());
        if let Err(e) = author_load {
            error!(error = %e, "Error fetching authors");
        }
        if let Err(e) = post_load {
            error!(error = %e, "Error fetching posts");
        }

        Ok(Self {
            authors,
            posts,
            handles,
        })
    }

    pub fn authors(&self) -> &AuthorClient {
        &self.authors
    }

    /// Table rows in list order.
    pub async fn rows(&self) -> Result<Vec<AuthorRow>, ViewError> {
        let authors = self.authors.authors().await?;
        let posts = self.posts.posts().await?;
        Ok(stats::author_rows(&authors, &posts))
    }

    #[instrument(name = "authors_view", skip(self))]
    pub async fn add_author(&self, params: NewAuthor) -> Result<Author, ViewError> {
        Ok(self.authors.create_author(params).await?)
    }

    #[instrument(name = "authors_view", skip(self))]
    pub async fn edit_author(
        &self,
        id: AuthorId,
        update: AuthorUpdate,
    ) -> Result<Author, ViewError> {
        Ok(self.authors.update_author(id, update).await?)
    }

    /// Removes the author. Their posts stay and keep counting under the old id.
    #[instrument(name = "authors_view", skip(self))]
    pub async fn delete_author(&self, id: AuthorId) -> Result<(), ViewError> {
        self.authors.delete(id).await.inspect_err(|e| {
            error!(error = %e, "Error deleting author");
        })?;
        Ok(())
    }

    pub async fn shutdown(self) -> Result<(), ViewError> {
        info!("Closing authors view");
        drop(self.authors);
        drop(self.posts);
        join_collections("authors", self.handles).await
    }
}
