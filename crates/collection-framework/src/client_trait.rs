//! # CollectionHandle Trait
//!
//! Provides a common interface for collection-specific clients, adding default
//! read and delete methods built on top of a generic `CollectionClient`.
use crate::{CollectionClient, CollectionEntity, FrameworkError};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the standard operations.
///
/// Implementors supply the inner [`CollectionClient`] and an error mapping; `load_all`,
/// `snapshot`, `get` and `delete` come for free. Creates and edits stay on the concrete
/// client, where the payload types are spelled out.
///
/// # Example
///
/// ```rust
/// use collection_framework::{CollectionClient, CollectionEntity, CollectionHandle, FrameworkError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: i64 }
/// #[derive(Debug)] struct NoteCreate;
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct NoteError(String);
///
/// impl CollectionEntity for Note {
///     type Id = i64; type Create = NoteCreate; type Update = NoteUpdate; type Error = NoteError;
///     fn id(&self) -> i64 { self.id }
///     fn from_create_params(id: i64, _: NoteCreate) -> Result<Self, NoteError> { Ok(Self { id }) }
///     fn on_update(&mut self, _: NoteUpdate) -> Result<(), NoteError> { Ok(()) }
/// }
///
/// struct NoteClient { inner: CollectionClient<Note> }
///
/// #[async_trait]
/// impl CollectionHandle<Note> for NoteClient {
///     type Error = NoteError;
///     fn inner(&self) -> &CollectionClient<Note> { &self.inner }
///     fn map_error(e: FrameworkError) -> NoteError { NoteError(e.to_string()) }
/// }
///
/// async fn usage(client: NoteClient) {
///     // load_all(), snapshot(), get() and delete() are provided automatically!
///     let _ = client.load_all().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait CollectionHandle<T: CollectionEntity>: Send + Sync {
    /// The collection-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic CollectionClient.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map framework errors to the collection-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Seed the collection from the whole remote collection.
    #[tracing::instrument(skip(self))]
    async fn load_all(&self) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().load_all().await.map_err(Self::map_error)
    }

    /// Current list, `None` while nothing has been loaded.
    async fn snapshot(&self) -> Result<Option<Vec<T>>, Self::Error> {
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Fetch an entity from the local list by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete remotely, then drop the entity from the local list.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
