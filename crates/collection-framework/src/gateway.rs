//! # Remote Collection Gateway
//!
//! The I/O boundary of a collection. A [`Gateway`] issues exactly one remote call per
//! method and surfaces any failure as a [`RequestError`]; it never retries and holds no
//! state about the collection.
//!
//! The collection actor receives its gateway at `run()` time, so tests can swap the
//! HTTP implementation ([`HttpGateway`](crate::http::HttpGateway)) for a
//! [`MockGateway`](crate::mock::MockGateway).

use crate::entity::CollectionEntity;
use crate::error::RequestError;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Query-string filter applied to a list fetch (e.g. `userId=3`).
///
/// An empty query fetches the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pairs: Vec<(String, String)>,
}

impl ListQuery {
    /// The unfiltered query.
    pub fn all() -> Self {
        Self::default()
    }

    /// A query with a single `key=value` filter.
    pub fn by(key: impl Into<String>, value: impl ToString) -> Self {
        Self::all().and(key, value)
    }

    pub fn and(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl fmt::Display for ListQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, "&")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Read/write operations against one remote collection.
///
/// `create` and `update` return the server's echo of the submitted body. Callers keep
/// their own locally assembled copy; the echo is informational only.
#[async_trait]
pub trait Gateway<T: CollectionEntity>: Send + Sync + 'static {
    /// Fetch the records matching `query`, in server order.
    async fn list(&self, query: &ListQuery) -> Result<Vec<T>, RequestError>;

    /// Fetch one record by id.
    async fn get_one(&self, id: T::Id) -> Result<T, RequestError>;

    /// Submit a new record.
    async fn create(&self, params: &T::Create) -> Result<Value, RequestError>;

    /// Submit an edit of an existing record.
    async fn update(&self, id: T::Id, update: &T::Update) -> Result<Value, RequestError>;

    /// Remove a record. `Ok(true)` on any 2xx answer.
    async fn delete(&self, id: T::Id) -> Result<bool, RequestError>;

    /// Fetch the whole collection.
    async fn list_all(&self) -> Result<Vec<T>, RequestError> {
        self.list(&ListQuery::all()).await
    }
}
