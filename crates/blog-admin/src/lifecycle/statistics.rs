use super::{join_collections, spawn_collection, ViewError};
use crate::clients::{AuthorClient, PostClient};
use crate::stats::Summary;
use crate::{author_collection, post_collection};
use collection_framework::{ClientConfig, CollectionHandle};
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// Totals, the per-author average and the posts-per-author chart.
///
/// Read-only: the page offers no actions.
pub struct StatisticsView {
    authors: AuthorClient,
    posts: PostClient,
    handles: Vec<JoinHandle<()>>,
}

impl StatisticsView {
    /// Loads authors and posts concurrently.
    #[instrument(name = "statistics_view", skip_all)]
    pub async fn activate(config: &ClientConfig) -> Result<Self, ViewError> {
        let (author_actor, authors) = author_collection::new(config);
        let (post_actor, posts) = post_collection::new(config);
        let handles = vec![
            spawn_collection(author_actor, config)?,
            spawn_collection(post_actor, config)?,
        ];

        let (author_load, post_load) = tokio::join!(authors.load_all(), posts.load_all());
        if let Err(e) = author_load {
            error!(error = %e, "Error fetching data");
        }
        if let Err(e) = post_load {
            error!(error = %e, "Error fetching data");
        }

        Ok(Self {
            authors,
            posts,
            handles,
        })
    }

    /// Recomputes the page from the current lists.
    pub async fn summary(&self) -> Result<Summary, ViewError> {
        let authors = self.authors.authors().await?;
        let posts = self.posts.posts().await?;
        Ok(Summary::compute(&authors, &posts))
    }

    pub async fn shutdown(self) -> Result<(), ViewError> {
        info!("Closing statistics view");
        drop(self.authors);
        drop(self.posts);
        join_collections("statistics", self.handles).await
    }
}
