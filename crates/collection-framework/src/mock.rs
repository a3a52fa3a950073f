//! # Mock Framework & Testing Guide
//!
//! Two seams can be faked without any network:
//!
//! | Seam | Tool | Use Case |
//! |------|------|----------|
//! | Gateway | [`MockGateway`] | Drive a **real** `CollectionActor` with scripted remote answers |
//! | Client channel | [`create_mock_client`] + `expect_*` | Unit-test a typed client wrapper; you answer each request by hand |
//!
//! ## Pattern 1: Real Collection, Scripted Remote
//!
//! ```rust
//! use collection_framework::mock::MockGateway;
//! use collection_framework::{CollectionActor, CollectionEntity, FrameworkError, RequestError};
//!
//! #[derive(Clone, Debug, PartialEq)] struct Note { id: i64 }
//! #[derive(Debug)] struct NoteCreate;
//! #[derive(Debug)] struct NoteUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! impl CollectionEntity for Note {
//!     type Id = i64; type Create = NoteCreate; type Update = NoteUpdate; type Error = NoteError;
//!     fn id(&self) -> i64 { self.id }
//!     fn from_create_params(id: i64, _: NoteCreate) -> Result<Self, NoteError> { Ok(Self { id }) }
//!     fn on_update(&mut self, _: NoteUpdate) -> Result<(), NoteError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockGateway::<Note>::new();
//!     mock.expect_list().return_ok(vec![Note { id: 1 }, Note { id: 2 }]);
//!     mock.expect_delete(2).return_err(RequestError::Status { status: 500, url: "/notes/2".into() });
//!
//!     let (actor, client) = CollectionActor::<Note>::new(10);
//!     tokio::spawn(actor.run(mock.gateway()));
//!
//!     client.load_all().await.unwrap();
//!     let err = client.delete(2).await.unwrap_err();
//!     assert!(matches!(err, FrameworkError::Request(_)));
//!     assert_eq!(client.snapshot().await.unwrap().unwrap().len(), 2);
//!     mock.verify();
//! }
//! ```
//!
//! ## Pattern 2: Client Logic Test (Pure Mock)
//!
//! Use [`create_mock_client`] to get a client plus the receiving end of its channel,
//! then answer with the helpers ([`expect_load`], [`expect_create`], [`expect_update`],
//! [`expect_delete`]). Nothing is spawned except the code under test.

use crate::client::CollectionClient;
use crate::entity::CollectionEntity;
use crate::error::{FrameworkError, RequestError};
use crate::gateway::{Gateway, ListQuery};
use crate::message::{CollectionRequest, Response};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected gateway call and the answer to give.
enum Expectation<T: CollectionEntity> {
    List {
        query: Option<ListQuery>,
        response: Result<Vec<T>, RequestError>,
    },
    GetOne {
        id: T::Id,
        response: Result<T, RequestError>,
    },
    Create {
        response: Result<Value, RequestError>,
    },
    Update {
        id: T::Id,
        response: Result<Value, RequestError>,
    },
    Delete {
        id: T::Id,
        response: Result<bool, RequestError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A scripted [`Gateway`]. Calls are matched against expectations in order; an
/// unexpected call panics the calling task.
///
/// Clones share the same script, so keep one handle for [`MockGateway::verify`] and
/// pass [`MockGateway::gateway`] to the collection.
pub struct MockGateway<T: CollectionEntity> {
    expectations: Queue<T>,
    calls: Arc<Mutex<usize>>,
}

impl<T: CollectionEntity> Clone for MockGateway<T> {
    fn clone(&self) -> Self {
        Self {
            expectations: self.expectations.clone(),
            calls: self.calls.clone(),
        }
    }
}

impl<T: CollectionEntity> Default for MockGateway<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CollectionEntity> MockGateway<T> {
    /// Creates a mock gateway with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// A handle to pass to `CollectionActor::run`.
    pub fn gateway(&self) -> Self {
        self.clone()
    }

    /// Expects a list fetch with any query.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            query: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a list fetch with exactly `query`.
    pub fn expect_list_by(&mut self, query: ListQuery) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            query: Some(query),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_get_one(&mut self, id: T::Id) -> ResponseBuilder<T, T> {
        ResponseBuilder::new(self.expectations.clone(), move |response| Expectation::GetOne {
            id,
            response,
        })
    }

    pub fn expect_create(&mut self) -> ResponseBuilder<T, Value> {
        ResponseBuilder::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ResponseBuilder<T, Value> {
        ResponseBuilder::new(self.expectations.clone(), move |response| Expectation::Update {
            id,
            response,
        })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ResponseBuilder<T, bool> {
        ResponseBuilder::new(self.expectations.clone(), move |response| Expectation::Delete {
            id,
            response,
        })
    }

    /// Number of gateway calls received so far.
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self, call: &str) -> Expectation<T> {
        *self.calls.lock().unwrap() += 1;
        self.expectations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected gateway call: {call}"))
    }
}

#[async_trait]
impl<T: CollectionEntity> Gateway<T> for MockGateway<T> {
    async fn list(&self, query: &ListQuery) -> Result<Vec<T>, RequestError> {
        match self.next("list") {
            Expectation::List {
                query: expected,
                response,
            } => {
                if let Some(expected) = expected {
                    assert_eq!(&expected, query, "list query mismatch");
                }
                response
            }
            _ => panic!("Unexpected request or expectation mismatch: list({query})"),
        }
    }

    async fn get_one(&self, id: T::Id) -> Result<T, RequestError> {
        match self.next("get_one") {
            Expectation::GetOne { id: expected, response } => {
                assert_eq!(expected, id, "get_one id mismatch");
                response
            }
            _ => panic!("Unexpected request or expectation mismatch: get_one({id})"),
        }
    }

    async fn create(&self, params: &T::Create) -> Result<Value, RequestError> {
        match self.next("create") {
            Expectation::Create { response } => response,
            _ => panic!("Unexpected request or expectation mismatch: create({params:?})"),
        }
    }

    async fn update(&self, id: T::Id, _update: &T::Update) -> Result<Value, RequestError> {
        match self.next("update") {
            Expectation::Update { id: expected, response } => {
                assert_eq!(expected, id, "update id mismatch");
                response
            }
            _ => panic!("Unexpected request or expectation mismatch: update({id})"),
        }
    }

    async fn delete(&self, id: T::Id) -> Result<bool, RequestError> {
        match self.next("delete") {
            Expectation::Delete { id: expected, response } => {
                assert_eq!(expected, id, "delete id mismatch");
                response
            }
            _ => panic!("Unexpected request or expectation mismatch: delete({id})"),
        }
    }
}

/// Builder for list expectations.
pub struct ListExpectationBuilder<T: CollectionEntity> {
    query: Option<ListQuery>,
    expectations: Queue<T>,
}

impl<T: CollectionEntity> ListExpectationBuilder<T> {
    /// Sets the expectation to return these records.
    pub fn return_ok(self, items: Vec<T>) {
        self.push(Ok(items));
    }

    /// Sets the expectation to fail.
    pub fn return_err(self, error: RequestError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<T>, RequestError>) {
        self.expectations.lock().unwrap().push_back(Expectation::List {
            query: self.query,
            response,
        });
    }
}

/// Builder for single-answer expectations (`get_one`, `create`, `update`, `delete`).
pub struct ResponseBuilder<T: CollectionEntity, R> {
    expectations: Queue<T>,
    make: Box<dyn FnOnce(Result<R, RequestError>) -> Expectation<T> + Send>,
}

impl<T: CollectionEntity, R> ResponseBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        make: impl FnOnce(Result<R, RequestError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let expectation = (self.make)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RequestError) {
        let expectation = (self.make)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the collection: it pulls each request with one of the `expect_*`
/// helpers below and answers through the returned responder.
pub fn create_mock_client<T: CollectionEntity>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<CollectionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Load request
pub async fn expect_load<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(ListQuery, Response<usize>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Load { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Wraps a remote failure the way the collection reports it.
pub fn request_failure(status: u16) -> FrameworkError {
    FrameworkError::Request(RequestError::Status {
        status,
        url: "mock".to_string(),
    })
}
