//! # Collection Framework
//!
//! Building blocks for client-side, per-view record collections backed by a REST API
//! that echoes writes without storing them.
//!
//! ## The Model
//!
//! A view fetches a collection once, and from then on its in-memory list is the only
//! source of truth. Every user action issues one remote call and, only once that call
//! succeeds, applies a local mutation:
//!
//! - **create** → the locally assembled record is prepended
//! - **update** → the merged record replaces the old one in place
//! - **delete** → the record is dropped
//!
//! A failed call changes nothing and hands the [`RequestError`] back to the caller.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`CollectionEntity`]) - record shapes, local assembly and merge
//! 2. **State Layer** ([`Collection`]) - the `Empty`/`Loaded` state machine
//! 3. **Runtime Layer** ([`CollectionActor`]) - one task per view collection, sequential processing
//! 4. **Interface Layer** ([`CollectionClient`], [`CollectionHandle`]) - type-safe handles
//! 5. **I/O Layer** ([`Gateway`], [`HttpGateway`]) - remote reads and writes
//!
//! Paging ([`pagination`]), local ids ([`TimestampIds`]) and configuration
//! ([`ClientConfig`]) are plain helpers used by the views.
//!
//! ## Concurrency Model
//!
//! - Each collection runs in its own Tokio task and owns its list exclusively
//! - Requests are processed **sequentially**: one gateway call in flight per collection
//! - Collections are never shared between views; a new view starts from `Empty`
//!
//! ## Testing
//!
//! [`mock::MockGateway`] scripts the remote side for a real collection task, and
//! [`mock::create_mock_client`] lets a test answer client requests by hand.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod config;
pub mod entity;
pub mod error;
pub mod gateway;
pub mod http;
pub mod ids;
pub mod message;
pub mod mock;
pub mod pagination;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use client_trait::CollectionHandle;
pub use config::ClientConfig;
pub use entity::CollectionEntity;
pub use error::{FrameworkError, RequestError};
pub use gateway::{Gateway, ListQuery};
pub use http::{HttpGateway, RemoteResource};
pub use ids::TimestampIds;
pub use message::{CollectionRequest, Response};
pub use pagination::{page_count, paginate, Page, PAGE_SIZE};
pub use state::Collection;
