//! # CollectionEntity Trait
//!
//! The `CollectionEntity` trait defines the contract every record kind (Author, Post, …)
//! implements to be held by the generic `CollectionActor`. It names the id, the creation
//! and edit payloads and the validation error, and provides the hooks the actor uses to
//! assemble and merge records locally once the remote side has confirmed a write.
//!
//! # Architecture Note
//! The remote placeholder API echoes writes but never stores them, so the collection
//! cannot take the server copy as the new state. Instead each entity knows how to build
//! itself from a creation payload plus a locally generated id
//! ([`CollectionEntity::from_create_params`]) and how to overwrite its fields with an
//! edit payload ([`CollectionEntity::on_update`]).
//!
//! # Provided Methods (Hooks)
//! - [`CollectionEntity::validate_create`]
//! - [`CollectionEntity::validate_update`]
//!
//! The default implementations accept everything (`Ok(())`).

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record kind must implement to be managed by a `CollectionActor`.
///
/// The associated types keep payloads apart at compile time: an `Author` collection only
/// accepts `NewAuthor` for creates and can never be handed a `NewPost`.
pub trait CollectionEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from the `i64` millisecond stamps used for local ids.
    type Id: Eq + Hash + Copy + Send + Sync + Display + Debug + From<i64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data submitted when editing an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this entity, returned by validation and hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this instance.
    fn id(&self) -> Self::Id;

    /// Assemble the local copy of a freshly created entity.
    /// Called only after the remote create succeeded.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Overwrite this entity's fields with the submitted edit.
    /// Called on a copy; the collection swaps it in only after the remote update succeeded.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Reject a creation payload before any remote call is made.
    fn validate_create(_params: &Self::Create) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Reject an edit payload before any remote call is made.
    fn validate_update(_update: &Self::Update) -> Result<(), Self::Error> {
        Ok(())
    }
}
