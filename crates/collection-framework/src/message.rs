//! # Generic Messages
//!
//! This module defines the message types exchanged between a `CollectionClient` and the
//! `CollectionActor` that owns the list.

use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use crate::gateway::ListQuery;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by collections.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the collection task.
///
/// The variants split into the remote-backed lifecycle (`Load`, `Create`, `Update`,
/// `Delete`), each of which issues exactly one gateway call, and local reads
/// (`Snapshot`, `Get`) that never leave the process.
#[derive(Debug)]
pub enum CollectionRequest<T: CollectionEntity> {
    /// Seed an `Empty` collection. Responds with the number of items loaded.
    Load {
        query: ListQuery,
        respond_to: Response<usize>,
    },
    /// Copy of the current list, `None` while `Empty`.
    Snapshot { respond_to: Response<Option<Vec<T>>> },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Responds with the locally assembled entity now at the front of the list.
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    /// Responds with the merged entity now stored in place.
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete { id: T::Id, respond_to: Response<()> },
}
