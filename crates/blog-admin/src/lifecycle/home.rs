use super::{join_collections, spawn_collection, ViewError};
use crate::clients::PostClient;
use crate::model::{Author, NewPost, Post, PostId, PostUpdate};
use crate::post_collection;
use collection_framework::{ClientConfig, CollectionHandle, Gateway, HttpGateway, Page, RequestError};
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// The home page: every post, newest local additions first, ten per page.
///
/// # Example
///
/// ```rust,no_run
/// use blog_admin::lifecycle::HomeView;
/// use blog_admin::model::{AuthorId, NewPost};
/// use collection_framework::ClientConfig;
///
/// # async fn run() -> Result<(), blog_admin::lifecycle::ViewError> {
/// let mut home = HomeView::activate(&ClientConfig::default()).await?;
/// home.add_post(NewPost {
///     title: "Hello".into(),
///     body: "My very first post".into(),
///     user_id: AuthorId(1),
/// })
/// .await?;
/// home.set_page(2);
/// let page = home.page().await?;
/// println!("page {} of {}", page.current_page, page.page_count);
/// home.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct HomeView {
    posts: PostClient,
    /// Feeds the author selector of the post forms.
    authors: HttpGateway<Author>,
    current_page: usize,
    page_size: usize,
    handles: Vec<JoinHandle<()>>,
}

impl HomeView {
    /// Starts the post collection and loads every post.
    #[instrument(name = "home_view", skip_all)]
    pub async fn activate(config: &ClientConfig) -> Result<Self, ViewError> {
        let (actor, posts) = post_collection::new(config);
        let handle = spawn_collection(actor, config)?;

        if let Err(e) = posts.load_all().await {
            error!(error = %e, "Error fetching posts");
        }

        Ok(Self {
            posts,
            authors: HttpGateway::new(config)?,
            current_page: 1,
            page_size: config.page_size,
            handles: vec![handle],
        })
    }

    pub fn posts(&self) -> &PostClient {
        &self.posts
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Moves to `page` (1-based). Pages past the end render empty.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// The posts on the current page and the pagination state.
    pub async fn page(&self) -> Result<Page<Post>, ViewError> {
        let posts = self.posts.posts().await?;
        Ok(Page::new(&posts, self.current_page, self.page_size))
    }

    /// Authors offered by the post forms, fetched fresh every time a form opens.
    pub async fn author_choices(&self) -> Result<Vec<Author>, RequestError> {
        self.authors.list_all().await.inspect_err(|e| {
            error!(error = %e, "Error loading authors");
        })
    }

    #[instrument(name = "home_view", skip(self))]
    pub async fn add_post(&self, params: NewPost) -> Result<Post, ViewError> {
        Ok(self.posts.create_post(params).await?)
    }

    #[instrument(name = "home_view", skip(self))]
    pub async fn edit_post(&self, id: PostId, update: PostUpdate) -> Result<Post, ViewError> {
        Ok(self.posts.update_post(id, update).await?)
    }

    #[instrument(name = "home_view", skip(self))]
    pub async fn delete_post(&self, id: PostId) -> Result<(), ViewError> {
        self.posts.delete(id).await.inspect_err(|e| {
            error!(error = %e, "Error deleting post");
        })?;
        Ok(())
    }

    /// Drops the collection and waits for its task to stop.
    pub async fn shutdown(self) -> Result<(), ViewError> {
        info!("Closing home view");
        drop(self.posts);
        join_collections("home", self.handles).await
    }
}
