use collection_framework::mock::MockGateway;
use collection_framework::{
    CollectionActor, CollectionClient, CollectionEntity, FrameworkError, ListQuery, RequestError,
    TimestampIds,
};
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Memo {
    id: i64,
    title: String,
    owner: i64,
}

#[derive(Debug)]
struct MemoCreate {
    title: String,
    owner: i64,
}

#[derive(Debug)]
struct MemoUpdate {
    title: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Title must be at least 3 characters")]
struct MemoError;

impl CollectionEntity for Memo {
    type Id = i64;
    type Create = MemoCreate;
    type Update = MemoUpdate;
    type Error = MemoError;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_create_params(id: i64, params: MemoCreate) -> Result<Self, MemoError> {
        Ok(Self {
            id,
            title: params.title,
            owner: params.owner,
        })
    }

    fn on_update(&mut self, update: MemoUpdate) -> Result<(), MemoError> {
        self.title = update.title;
        Ok(())
    }

    fn validate_create(params: &MemoCreate) -> Result<(), MemoError> {
        if params.title.chars().count() < 3 {
            return Err(MemoError);
        }
        Ok(())
    }

    fn validate_update(update: &MemoUpdate) -> Result<(), MemoError> {
        if update.title.chars().count() < 3 {
            return Err(MemoError);
        }
        Ok(())
    }
}

fn memo(id: i64) -> Memo {
    Memo {
        id,
        title: format!("memo {id}"),
        owner: 1,
    }
}

fn server_error() -> RequestError {
    RequestError::Status {
        status: 500,
        url: "http://remote/memos".to_string(),
    }
}

/// A clock that advances by one millisecond per read, starting at `start`.
fn ticking_ids(start: i64) -> TimestampIds {
    let now = Arc::new(AtomicI64::new(start));
    TimestampIds::with_clock(Arc::new(move || now.fetch_add(1, Ordering::SeqCst)))
}

fn spawn(mock: &MockGateway<Memo>, ids: TimestampIds) -> (CollectionClient<Memo>, tokio::task::JoinHandle<()>) {
    let (actor, client) = CollectionActor::<Memo>::with_ids(10, ids);
    let handle = tokio::spawn(actor.run(mock.gateway()));
    (client, handle)
}

async fn ids_of(client: &CollectionClient<Memo>) -> Vec<i64> {
    client
        .snapshot()
        .await
        .unwrap()
        .expect("collection should be loaded")
        .iter()
        .map(|m| m.id)
        .collect()
}

#[tokio::test]
async fn test_load_seeds_collection_once() {
    let mut mock = MockGateway::<Memo>::new();
    mock.expect_list().return_ok(vec![memo(1), memo(2), memo(3)]);
    let (client, handle) = spawn(&mock, TimestampIds::new());

    assert!(client.snapshot().await.unwrap().is_none());
    assert_eq!(client.load_all().await.unwrap(), 3);
    assert_eq!(ids_of(&client).await, vec![1, 2, 3]);

    // A second load never reaches the remote side.
    let err = client.load_all().await.unwrap_err();
    assert!(matches!(err, FrameworkError::AlreadyLoaded));
    assert_eq!(mock.calls(), 1);

    mock.verify();
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_load_stays_empty() {
    let mut mock = MockGateway::<Memo>::new();
    mock.expect_list().return_err(server_error());
    let (client, _handle) = spawn(&mock, TimestampIds::new());

    let err = client.load_all().await.unwrap_err();
    assert_eq!(err.request_error().and_then(RequestError::status), Some(500));
    assert!(client.snapshot().await.unwrap().is_none());

    // Writes are refused without a remote call while empty.
    let err = client
        .create(MemoCreate {
            title: "hello".into(),
            owner: 1,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotLoaded));
    assert!(matches!(client.delete(1).await, Err(FrameworkError::NotLoaded)));
    assert_eq!(mock.calls(), 1);
    mock.verify();
}

#[tokio::test]
async fn test_filtered_load_passes_query() {
    let mut mock = MockGateway::<Memo>::new();
    mock.expect_list_by(ListQuery::by("owner", 7))
        .return_ok(vec![memo(4)]);
    let (client, _handle) = spawn(&mock, TimestampIds::new());

    assert_eq!(client.load(ListQuery::by("owner", 7)).await.unwrap(), 1);
    mock.verify();
}

#[tokio::test]
async fn test_create_prepends_with_timestamp_id() {
    let mut mock = MockGateway::<Memo>::new();
    mock.expect_list().return_ok(vec![memo(1), memo(2)]);
    mock.expect_create().return_ok(json!({ "id": 101 }));
    mock.expect_create().return_ok(json!({ "id": 101 }));
    let (client, _handle) = spawn(&mock, ticking_ids(1_700_000_000_000));

    client.load_all().await.unwrap();

    let first = client
        .create(MemoCreate {
            title: "first".into(),
            owner: 2,
        })
        .await
        .unwrap();
    assert_eq!(first.id, 1_700_000_000_000);
    assert_eq!(first.owner, 2);

    let second = client
        .create(MemoCreate {
            title: "second".into(),
            owner: 2,
        })
        .await
        .unwrap();
    // The server echo's id is ignored; ids follow the clock.
    assert!(second.id >= first.id);
    assert_eq!(ids_of(&client).await, vec![second.id, first.id, 1, 2]);
    mock.verify();
}

#[tokio::test]
async fn test_failed_create_leaves_list_untouched() {
    let mut mock = MockGateway::<Memo>::new();
    mock.expect_list().return_ok(vec![memo(1)]);
    mock.expect_create().return_err(server_error());
    let (client, _handle) = spawn(&mock, TimestampIds::new());

    client.load_all().await.unwrap();
    let err = client
        .create(MemoCreate {
            title: "doomed".into(),
            owner: 1,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::Request(_)));
    assert_eq!(ids_of(&client).await, vec![1]);
    mock.verify();
}

#[tokio::test]
async fn test_invalid_create_is_rejected_before_remote_call() {
    let mut mock = MockGateway::<Memo>::new();
    mock.expect_list().return_ok(vec![]);
    let (client, _handle) = spawn(&mock, TimestampIds::new());

    client.load_all().await.unwrap();
    let err = client
        .create(MemoCreate {
            title: "ab".into(),
            owner: 1,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));
    assert!(err.to_string().contains("at least 3 characters"));
    assert_eq!(mock.calls(), 1);
    assert_eq!(ids_of(&client).await, Vec::<i64>::new());
}

#[tokio::test]
async fn test_update_replaces_in_place() {
    let mut mock = MockGateway::<Memo>::new();
    mock.expect_list().return_ok(vec![memo(1), memo(2), memo(3)]);
    mock.expect_update(2).return_ok(json!({ "id": 2, "title": "renamed" }));
    let (client, _handle) = spawn(&mock, TimestampIds::new());

    client.load_all().await.unwrap();
    let before = client.snapshot().await.unwrap().unwrap();

    let updated = client
        .update(
            2,
            MemoUpdate {
                title: "renamed".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.owner, 1);

    let after = client.snapshot().await.unwrap().unwrap();
    assert_eq!(after.len(), before.len());
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], updated);
    assert_eq!(after[2], before[2]);
    mock.verify();
}

#[tokio::test]
async fn test_failed_update_keeps_old_entity() {
    let mut mock = MockGateway::<Memo>::new();
    mock.expect_list().return_ok(vec![memo(1)]);
    mock.expect_update(1).return_err(server_error());
    let (client, _handle) = spawn(&mock, TimestampIds::new());

    client.load_all().await.unwrap();
    let result = client
        .update(
            1,
            MemoUpdate {
                title: "renamed".into(),
            },
        )
        .await;
    assert!(matches!(result, Err(FrameworkError::Request(_))));
    assert_eq!(client.get(1).await.unwrap(), Some(memo(1)));
    mock.verify();
}

#[tokio::test]
async fn test_unknown_id_is_not_sent() {
    let mut mock = MockGateway::<Memo>::new();
    mock.expect_list().return_ok(vec![memo(1)]);
    let (client, _handle) = spawn(&mock, TimestampIds::new());

    client.load_all().await.unwrap();
    let update = client
        .update(
            9,
            MemoUpdate {
                title: "renamed".into(),
            },
        )
        .await;
    assert!(matches!(update, Err(FrameworkError::NotFound(id)) if id == "9"));
    assert!(matches!(client.delete(9).await, Err(FrameworkError::NotFound(_))));
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_delete_removes_only_target() {
    let mut mock = MockGateway::<Memo>::new();
    mock.expect_list().return_ok(vec![memo(1), memo(2), memo(3), memo(4)]);
    mock.expect_delete(3).return_ok(true);
    let (client, _handle) = spawn(&mock, TimestampIds::new());

    client.load_all().await.unwrap();
    client.delete(3).await.unwrap();
    assert_eq!(ids_of(&client).await, vec![1, 2, 4]);
    assert_eq!(client.get(3).await.unwrap(), None);
    mock.verify();
}

#[tokio::test]
async fn test_failed_delete_is_observable_and_harmless() {
    let mut mock = MockGateway::<Memo>::new();
    mock.expect_list().return_ok(vec![memo(1), memo(2)]);
    mock.expect_delete(2).return_err(RequestError::Status {
        status: 404,
        url: "http://remote/memos/2".into(),
    });
    let (client, _handle) = spawn(&mock, TimestampIds::new());

    client.load_all().await.unwrap();
    let err = client.delete(2).await.unwrap_err();
    let request = err.request_error().expect("remote failure should surface");
    assert_eq!(request.status(), Some(404));
    assert_eq!(ids_of(&client).await, vec![1, 2]);
    mock.verify();
}

#[tokio::test]
async fn test_unconfirmed_delete_keeps_entity() {
    let mut mock = MockGateway::<Memo>::new();
    mock.expect_list().return_ok(vec![memo(1), memo(2)]);
    mock.expect_delete(2).return_ok(false);
    let (client, _handle) = spawn(&mock, TimestampIds::new());

    client.load_all().await.unwrap();
    let err = client.delete(2).await.unwrap_err();
    assert!(matches!(err, FrameworkError::DeleteRejected(ref id) if id == "2"));
    assert_eq!(ids_of(&client).await, vec![1, 2]);
    mock.verify();
}

#[tokio::test]
async fn test_shutdown_when_clients_dropped() {
    let mock = MockGateway::<Memo>::new();
    let (client, handle) = spawn(&mock, TimestampIds::new());
    let clone = client.clone();
    drop(client);
    drop(clone);
    handle.await.unwrap();
    assert_eq!(mock.calls(), 0);
}
