//! # Author Client
//!
//! Provides a high‑level API for the author collection.
//! It wraps a `CollectionClient<Author>` and exposes the author forms.
use crate::author_collection::AuthorError;
use crate::model::{Author, AuthorId, AuthorUpdate, NewAuthor};
use async_trait::async_trait;
use collection_framework::{CollectionClient, CollectionHandle, FrameworkError};
use tracing::{debug, instrument};

/// Client for interacting with an author collection.
#[derive(Clone)]
pub struct AuthorClient {
    inner: CollectionClient<Author>,
}

impl AuthorClient {
    pub fn new(inner: CollectionClient<Author>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl CollectionHandle<Author> for AuthorClient {
    type Error = AuthorError;

    fn inner(&self) -> &CollectionClient<Author> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        AuthorError::from(e)
    }
}

impl AuthorClient {
    /// Submits the add-author form. The new author is listed first.
    #[instrument(skip(self))]
    pub async fn create_author(&self, params: NewAuthor) -> Result<Author, AuthorError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(AuthorError::from)
    }

    /// Submits the edit-author form and returns the merged author.
    #[instrument(skip(self))]
    pub async fn update_author(
        &self,
        id: AuthorId,
        update: AuthorUpdate,
    ) -> Result<Author, AuthorError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(AuthorError::from)
    }

    /// The loaded authors, or an empty list while loading.
    pub async fn authors(&self) -> Result<Vec<Author>, AuthorError> {
        Ok(self.snapshot().await?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_framework::mock::{create_mock_client, expect_create, expect_update, request_failure};

    fn new_author() -> NewAuthor {
        NewAuthor {
            name: "Chelsey Dietrich".into(),
            username: "Kamren".into(),
            email: "Lucio_Hettinger@annie.ca".into(),
            website: Some("demarco.info".into()),
        }
    }

    #[tokio::test]
    async fn test_create_author_forwards_payload() {
        let (client, mut receiver) = create_mock_client::<Author>(10);
        let author_client = AuthorClient::new(client);

        let create_task = tokio::spawn(async move { author_client.create_author(new_author()).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.username, "Kamren");
        responder
            .send(Ok(Author {
                id: AuthorId(1_700_000_000_000),
                name: params.name,
                username: params.username,
                email: params.email,
                website: params.website,
            }))
            .unwrap();

        let author = create_task.await.unwrap().unwrap();
        assert_eq!(author.id, AuthorId(1_700_000_000_000));
    }

    #[tokio::test]
    async fn test_update_author_keeps_request_error() {
        let (client, mut receiver) = create_mock_client::<Author>(10);
        let author_client = AuthorClient::new(client);

        let update_task = tokio::spawn(async move {
            author_client
                .update_author(
                    AuthorId(5),
                    AuthorUpdate {
                        name: "Chelsey".into(),
                        username: "Kamren".into(),
                        email: "c@annie.ca".into(),
                        website: None,
                    },
                )
                .await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, AuthorId(5));
        assert_eq!(update.website, None);
        responder.send(Err(request_failure(503))).unwrap();

        match update_task.await.unwrap() {
            Err(AuthorError::Request(e)) => assert_eq!(e.status(), Some(503)),
            other => panic!("Expected Request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_validation_error_is_unwrapped() {
        let (client, mut receiver) = create_mock_client::<Author>(10);
        let author_client = AuthorClient::new(client);

        let create_task = tokio::spawn(async move { author_client.create_author(new_author()).await });

        let (_, responder) = expect_create(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                AuthorError::Validation("Please enter a valid email address".into()),
            ))))
            .unwrap();

        assert_eq!(
            create_task.await.unwrap(),
            Err(AuthorError::Validation(
                "Please enter a valid email address".into()
            ))
        );
    }
}
