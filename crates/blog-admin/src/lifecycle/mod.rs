//! # View Lifecycle
//!
//! Every page of the admin is a *view*: activating it spins up fresh collections, seeds
//! them from the API and hands out the actions the page offers. Collections are never
//! shared between views, and a view never re-fetches once its lists are loaded.
//!
//! | View | Collections | Initial requests |
//! |------|-------------|------------------|
//! | [`HomeView`] | posts | `GET /posts` |
//! | [`AuthorsView`] | authors, posts | `GET /users`, `GET /posts` |
//! | [`AuthorDetailsView`] | posts | `GET /users/{id}`, then `GET /posts?userId={id}` |
//! | [`StatisticsView`] | authors, posts | `GET /users` and `GET /posts` concurrently |
//!
//! ## Failed Loads
//!
//! A failed initial request is logged with `error!` and leaves its collection `Empty`.
//! The view still activates; the page shows its loading state and nothing is retried.
//!
//! ## Graceful Shutdown
//!
//! `shutdown()` follows the same steps for every view:
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Collections detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every collection task to finish
//!
//! A request still in flight when the view goes away completes, then its task exits.

pub mod author_details;
pub mod authors;
pub mod home;
pub mod statistics;

pub use author_details::*;
pub use authors::*;
pub use home::*;
pub use statistics::*;

use crate::author_collection::AuthorError;
use crate::post_collection::PostError;
use collection_framework::{ClientConfig, CollectionActor, HttpGateway, RemoteResource, RequestError};
use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors surfaced by view actions.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Author(#[from] AuthorError),

    #[error(transparent)]
    Post(#[from] PostError),

    /// The HTTP client for the view could not be built, or a direct fetch failed.
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Collection task failed: {0}")]
    TaskFailed(String),
}

/// Runs `actor` against the HTTP API in its own task.
fn spawn_collection<T>(
    actor: CollectionActor<T>,
    config: &ClientConfig,
) -> Result<JoinHandle<()>, RequestError>
where
    T: RemoteResource,
    T::Create: Serialize,
    T::Update: Serialize,
{
    let gateway = HttpGateway::<T>::new(config)?;
    Ok(tokio::spawn(actor.run(gateway)))
}

/// Awaits collection tasks whose clients have already been dropped.
async fn join_collections(view: &str, handles: Vec<JoinHandle<()>>) -> Result<(), ViewError> {
    for handle in handles {
        if let Err(e) = handle.await {
            error!(view, "Collection task failed: {:?}", e);
            return Err(ViewError::TaskFailed(format!("{e:?}")));
        }
    }
    info!(view, "View closed");
    Ok(())
}
