use super::{join_collections, spawn_collection, ViewError};
use crate::clients::PostClient;
use crate::model::{Author, AuthorDetails, AuthorId, Post};
use crate::post_collection;
use collection_framework::{ClientConfig, Gateway, HttpGateway};
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// One author's page: contact details followed by their posts.
///
/// The posts are requested only once the author has been fetched and accepted as
/// [`AuthorDetails`]. If that fails the view stays in its loading state for good.
pub struct AuthorDetailsView {
    author_id: AuthorId,
    author: Option<AuthorDetails>,
    posts: PostClient,
    handles: Vec<JoinHandle<()>>,
}

impl AuthorDetailsView {
    #[instrument(name = "author_details_view", skip(config))]
    pub async fn activate(config: &ClientConfig, author_id: AuthorId) -> Result<Self, ViewError> {
        let authors = HttpGateway::<Author>::new(config)?;
        let (actor, posts) = post_collection::new(config);
        let handle = spawn_collection(actor, config)?;

        let author = match authors.get_one(author_id).await {
            Ok(author) => match AuthorDetails::try_from(author) {
                Ok(details) => Some(details),
                Err(e) => {
                    error!(error = %e, "Error fetching author details or posts");
                    None
                }
            },
            Err(e) => {
                error!(error = %e, "Error fetching author details or posts");
                None
            }
        };

        if author.is_some() {
            if let Err(e) = posts.load_by_author(author_id).await {
                error!(error = %e, "Error fetching author details or posts");
            }
        }

        Ok(Self {
            author_id,
            author,
            posts,
            handles: vec![handle],
        })
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    /// `true` until the author has been fetched.
    pub fn is_loading(&self) -> bool {
        self.author.is_none()
    }

    pub fn author(&self) -> Option<&AuthorDetails> {
        self.author.as_ref()
    }

    /// The author's posts; empty while loading or if the posts request failed.
    pub async fn posts(&self) -> Result<Vec<Post>, ViewError> {
        Ok(self.posts.posts().await?)
    }

    pub async fn shutdown(self) -> Result<(), ViewError> {
        info!(author_id = %self.author_id, "Closing author details view");
        drop(self.posts);
        join_collections("author_details", self.handles).await
    }
}
