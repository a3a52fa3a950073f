//! # Collection Actor
//!
//! This module defines the `CollectionActor`, the task that owns one view's reconciled
//! list. It processes requests sequentially, so at most one gateway call per collection
//! is in flight and a local mutation is applied only after its call has resolved.

use crate::client::CollectionClient;
use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use crate::gateway::Gateway;
use crate::ids::TimestampIds;
use crate::message::CollectionRequest;
use crate::state::Collection;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that manages one reconciled collection.
///
/// # Architecture Note
/// This struct is the "Server" half. It owns the [`Collection`] state and the receiving
/// end of the channel; nothing else can touch the list, so no `Mutex` is needed.
///
/// # Usage Pattern
///
/// 1.  **Create**: `CollectionActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass the gateway into `actor.run(gateway)`.
/// 3.  **Run**: spawn the run loop; drop every client to stop it.
///
/// ```rust,no_run
/// use collection_framework::{CollectionActor, CollectionEntity, HttpGateway, ClientConfig, RemoteResource};
///
/// #[derive(Clone, Debug, serde::Deserialize)] struct Note { id: i64, text: String }
/// #[derive(Debug, serde::Serialize)] struct NoteCreate { text: String }
/// #[derive(Debug, serde::Serialize)] struct NoteUpdate { text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// impl CollectionEntity for Note {
///     type Id = i64; type Create = NoteCreate; type Update = NoteUpdate; type Error = NoteError;
///     fn id(&self) -> i64 { self.id }
///     fn from_create_params(id: i64, p: NoteCreate) -> Result<Self, NoteError> { Ok(Self { id, text: p.text }) }
///     fn on_update(&mut self, u: NoteUpdate) -> Result<(), NoteError> { self.text = u.text; Ok(()) }
/// }
/// impl RemoteResource for Note { const PATH: &'static str = "notes"; }
///
/// #[tokio::main]
/// async fn main() {
///     let config = ClientConfig::default();
///     let (actor, client) = CollectionActor::<Note>::new(config.buffer_size);
///     let gateway = HttpGateway::<Note>::new(&config).unwrap();
///     tokio::spawn(actor.run(gateway));
///
///     client.load_all().await.unwrap();
///     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
///     assert_eq!(client.snapshot().await.unwrap().unwrap()[0].id, note.id);
/// }
/// ```
///
/// # Operations
///
/// * **Load**: only from `Empty`. Fetches through the gateway and replaces the state.
///   A failed fetch leaves the collection `Empty`.
/// * **Create**: validates, reads the id clock, calls the gateway, then assembles the
///   entity locally and prepends it.
/// * **Update**: validates, calls the gateway, then merges the edit into a copy and
///   swaps the copy in at the same position.
/// * **Delete**: calls the gateway, then removes the entity. A gateway that answers
///   without confirming the delete yields `DeleteRejected` and the entity stays.
///
/// Writes against an `Empty` collection or an unknown id are refused before any remote
/// call. A failed remote call leaves the list exactly as it was.
pub struct CollectionActor<T: CollectionEntity> {
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    state: Collection<T>,
    ids: TimestampIds,
}

impl<T: CollectionEntity> CollectionActor<T> {
    /// Creates a new `CollectionActor` (using the system clock for ids) and its client.
    ///
    /// * `buffer_size` - capacity of the request channel. When full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient<T>) {
        Self::with_ids(buffer_size, TimestampIds::new())
    }

    /// Like [`CollectionActor::new`] with an explicit id source.
    pub fn with_ids(buffer_size: usize, ids: TimestampIds) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: Collection::Empty,
            ids,
        };
        let client = CollectionClient::new(sender);
        (actor, client)
    }

    /// Runs the request loop until every client has been dropped.
    ///
    /// # Gateway Injection
    /// The gateway is bound here rather than in `new()`, so the same actor type runs
    /// against HTTP in production and against a mock in tests.
    pub async fn run<G: Gateway<T>>(mut self, gateway: G) {
        // Extract just the type name (e.g., "Post" instead of "blog_admin::model::post::Post")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::Load { query, respond_to } => {
                    debug!(entity_type, %query, "Load");
                    if self.state.is_loaded() {
                        warn!(entity_type, "Already loaded");
                        let _ = respond_to.send(Err(FrameworkError::AlreadyLoaded));
                        continue;
                    }
                    match gateway.list(&query).await {
                        Ok(items) => {
                            let size = items.len();
                            let result = self.state.load(items).map(|()| size);
                            info!(entity_type, size, "Loaded");
                            let _ = respond_to.send(result);
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Load failed");
                            let _ = respond_to.send(Err(e.into()));
                        }
                    }
                }
                CollectionRequest::Snapshot { respond_to } => {
                    let items = self.state.items().map(<[T]>::to_vec);
                    debug!(entity_type, loaded = items.is_some(), "Snapshot");
                    let _ = respond_to.send(Ok(items));
                }
                CollectionRequest::Get { id, respond_to } => {
                    let item = self.state.get(id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                CollectionRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(&gateway, params).await;
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.state.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CollectionRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&gateway, id, update).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CollectionRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&gateway, id).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.state.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.state.len(), "Shutdown");
    }

    async fn create<G: Gateway<T>>(
        &mut self,
        gateway: &G,
        params: T::Create,
    ) -> Result<T, FrameworkError> {
        if !self.state.is_loaded() {
            return Err(FrameworkError::NotLoaded);
        }
        T::validate_create(&params).map_err(entity_error)?;

        let id = T::Id::from(self.ids.next_id());
        // The echo carries the server's id, which is never persisted upstream.
        gateway.create(&params).await?;

        let item = T::from_create_params(id, params).map_err(entity_error)?;
        self.state.insert_front(item.clone())?;
        Ok(item)
    }

    async fn update<G: Gateway<T>>(
        &mut self,
        gateway: &G,
        id: T::Id,
        update: T::Update,
    ) -> Result<T, FrameworkError> {
        if !self.state.is_loaded() {
            return Err(FrameworkError::NotLoaded);
        }
        let mut merged = self
            .state
            .get(id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        T::validate_update(&update).map_err(entity_error)?;

        gateway.update(id, &update).await?;

        merged.on_update(update).map_err(entity_error)?;
        self.state.replace(merged.clone())?;
        Ok(merged)
    }

    async fn delete<G: Gateway<T>>(&mut self, gateway: &G, id: T::Id) -> Result<(), FrameworkError> {
        if !self.state.is_loaded() {
            return Err(FrameworkError::NotLoaded);
        }
        if !self.state.contains(id) {
            return Err(FrameworkError::NotFound(id.to_string()));
        }

        if !gateway.delete(id).await? {
            return Err(FrameworkError::DeleteRejected(id.to_string()));
        }
        self.state.remove(id)?;
        Ok(())
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}
