//! # Generic Client
//!
//! This module defines the generic handle for talking to a collection task.

use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use crate::gateway::ListQuery;
use crate::message::CollectionRequest;
use tokio::sync::{mpsc, oneshot};

/// ## CollectionClient
///
/// The `CollectionClient<T>` provides a type‑safe, async API for a `CollectionActor<T>`.
/// It forwards requests over a Tokio mpsc channel and receives results via oneshot
/// channels. It holds only a sender, so it is cheap to clone; the collection stops once
/// every clone has been dropped.
pub struct CollectionClient<T: CollectionEntity> {
    sender: mpsc::Sender<CollectionRequest<T>>,
}

impl<T: CollectionEntity> Clone for CollectionClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: CollectionEntity> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> CollectionRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::CollectionClosed)?;
        response.await.map_err(|_| FrameworkError::CollectionDropped)?
    }

    /// Seed the collection with the records matching `query`.
    pub async fn load(&self, query: ListQuery) -> Result<usize, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Load { query, respond_to })
            .await
    }

    /// Seed the collection with the whole remote collection.
    pub async fn load_all(&self) -> Result<usize, FrameworkError> {
        self.load(ListQuery::all()).await
    }

    pub async fn snapshot(&self) -> Result<Option<Vec<T>>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Snapshot { respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Get { id, respond_to })
            .await
    }

    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Create { params, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| CollectionRequest::Delete { id, respond_to })
            .await
    }
}
