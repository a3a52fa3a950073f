//! # HTTP Gateway
//!
//! [`HttpGateway`] is the production [`Gateway`]: JSON over HTTP against
//! `{base_url}/{T::PATH}`, one `reqwest` request per call.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list      | `GET /{path}` or `GET /{path}?k=v` |
//! | get_one   | `GET /{path}/{id}` |
//! | create    | `POST /{path}` |
//! | update    | `PUT /{path}/{id}` |
//! | delete    | `DELETE /{path}/{id}` |

use crate::config::ClientConfig;
use crate::entity::CollectionEntity;
use crate::error::RequestError;
use crate::gateway::{Gateway, ListQuery};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{debug, warn};

/// A collection that lives under a fixed path of the remote API.
pub trait RemoteResource: CollectionEntity + DeserializeOwned {
    /// Path segment of the collection, e.g. `"users"`.
    const PATH: &'static str;
}

/// Type-safe JSON gateway for one remote collection.
pub struct HttpGateway<T: RemoteResource> {
    http: reqwest::Client,
    base_url: String,
    _phantom: PhantomData<T>,
}

impl<T: RemoteResource> Clone for HttpGateway<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: RemoteResource> HttpGateway<T> {
    /// Builds a gateway with its own HTTP client configured from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, RequestError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;
        Ok(Self::with_client(http, &config.base_url))
    }

    /// Builds a gateway sharing an existing HTTP client.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            _phantom: PhantomData,
        }
    }

    /// `{base_url}/{path}`
    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, T::PATH)
    }

    /// `{base_url}/{path}/{id}`
    pub fn item_url(&self, id: T::Id) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    /// Sends `request`, failing on any non-2xx status without reading the body.
    async fn send(
        &self,
        method: &'static str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, RequestError> {
        let response = request.send().await.map_err(|e| {
            warn!(method, url, error = %e, "Request failed");
            RequestError::from(e)
        })?;
        let status = response.status();
        debug!(method, url, status = status.as_u16(), "Response");
        if !status.is_success() {
            warn!(method, url, status = status.as_u16(), "Unsuccessful status");
            return Err(RequestError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    async fn parse<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, RequestError> {
        response
            .json::<R>()
            .await
            .map_err(|e| RequestError::Decode(format!("response body: {e}")))
    }
}

#[async_trait]
impl<T> Gateway<T> for HttpGateway<T>
where
    T: RemoteResource,
    T::Create: Serialize,
    T::Update: Serialize,
{
    async fn list(&self, query: &ListQuery) -> Result<Vec<T>, RequestError> {
        let url = self.collection_url();
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query.pairs());
        }
        let response = self.send("GET", &url, request).await?;
        Self::parse(response).await
    }

    async fn get_one(&self, id: T::Id) -> Result<T, RequestError> {
        let url = self.item_url(id);
        let response = self.send("GET", &url, self.http.get(&url)).await?;
        Self::parse(response).await
    }

    async fn create(&self, params: &T::Create) -> Result<Value, RequestError> {
        let url = self.collection_url();
        let request = self.http.post(&url).json(params);
        let response = self.send("POST", &url, request).await?;
        Self::parse(response).await
    }

    async fn update(&self, id: T::Id, update: &T::Update) -> Result<Value, RequestError> {
        let url = self.item_url(id);
        let request = self.http.put(&url).json(update);
        let response = self.send("PUT", &url, request).await?;
        Self::parse(response).await
    }

    async fn delete(&self, id: T::Id) -> Result<bool, RequestError> {
        let url = self.item_url(id);
        self.send("DELETE", &url, self.http.delete(&url)).await?;
        // The placeholder API answers 200 with an empty object; nothing else to read.
        Ok(true)
    }
}
