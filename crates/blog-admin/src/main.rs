//! # Blog Admin Demo
//!
//! Walks through the four views against the placeholder API:
//! 1.  Home: list a page of posts, add one, edit it, delete another.
//! 2.  Authors: list authors with post counts and add one.
//! 3.  Author details for `--author`.
//! 4.  Statistics.

use blog_admin::lifecycle::{AuthorDetailsView, AuthorsView, HomeView, StatisticsView, ViewError};
use blog_admin::model::{AuthorId, NewAuthor, NewPost, PostId, PostUpdate};
use blog_admin::stats;
use clap::Parser;
use collection_framework::tracing::setup_tracing;
use collection_framework::ClientConfig;
use tracing::{error, info, Instrument};

#[derive(Parser, Debug)]
#[command(name = "blog-admin", about = "Authors and posts against a JSON placeholder API")]
struct Args {
    /// Root of the REST API
    #[arg(long, default_value = collection_framework::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Home page to show (1-based)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Author shown on the details page
    #[arg(long, default_value_t = 1)]
    author: i64,

    /// HTTP timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), ViewError> {
    setup_tracing();
    let args = Args::parse();

    let config = ClientConfig {
        timeout_secs: args.timeout,
        ..ClientConfig::with_base_url(args.base_url)
    };
    info!(base_url = %config.base_url, "Starting blog admin");

    // --- Home ---
    let mut home = HomeView::activate(&config).await?;
    home.set_page(args.page);

    let authors = home.author_choices().await.unwrap_or_default();
    let page = home.page().await?;
    info!(
        page = page.current_page,
        pages = page.page_count,
        controls = page.shows_controls(),
        "Home page"
    );
    for post in &page.items {
        info!(id = %post.id, author = %stats::author_label(&authors, post.user_id), "{}", post.title);
    }

    let span = tracing::info_span!("post_editing");
    async {
        let author = authors.first().map(|a| a.id).unwrap_or(AuthorId(1));
        match home
            .add_post(NewPost {
                title: "Hello from the admin".into(),
                body: "A post assembled locally after the API confirmed it.".into(),
                user_id: author,
            })
            .await
        {
            Ok(post) => {
                info!(id = %post.id, "Post added");
                let mut update = PostUpdate::from_post(&post);
                update.title = "Hello again from the admin".into();
                if let Err(e) = home.edit_post(post.id, update).await {
                    error!(error = %e, "Post edit failed");
                }
            }
            Err(e) => error!(error = %e, "Post creation failed"),
        }
        if let Err(e) = home.delete_post(PostId(1)).await {
            error!(error = %e, "Post deletion failed");
        }
    }
    .instrument(span)
    .await;
    home.shutdown().await?;

    // --- Authors ---
    let authors_view = AuthorsView::activate(&config).await?;
    let added = authors_view
        .add_author(NewAuthor {
            name: "Ada Lovelace".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            website: Some("ada.dev".into()),
        })
        .await;
    match added {
        Ok(author) => info!(id = %author.id, "Author added"),
        Err(e) => error!(error = %e, "Author creation failed"),
    }
    for row in authors_view.rows().await? {
        info!(id = %row.author.id, posts = row.post_count, "{}", row.author.name);
    }
    authors_view.shutdown().await?;

    // --- Author details ---
    let details = AuthorDetailsView::activate(&config, AuthorId(args.author)).await?;
    match details.author() {
        Some(author) => {
            let posts = details.posts().await?;
            info!(website = %author.website_url(), posts = posts.len(), "{}", author.name);
        }
        None => info!("Loading author details..."),
    }
    details.shutdown().await?;

    // --- Statistics ---
    let statistics = StatisticsView::activate(&config).await?;
    let summary = statistics.summary().await?;
    info!(
        authors = summary.total_authors,
        posts = summary.total_posts,
        average = %summary.average_label(),
        "Statistics"
    );
    for (name, count) in &summary.chart {
        info!(posts = count, "{}", name);
    }
    statistics.shutdown().await?;

    info!("Blog admin finished");
    Ok(())
}
