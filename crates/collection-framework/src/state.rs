//! # Collection State
//!
//! The in-memory list behind one view, modelled as an explicit two-state machine:
//!
//! ```text
//!            load (replace wholesale)
//!   Empty ─────────────────────────────▶ Loaded(Vec<T>)
//!                                         │  ▲
//!          insert_front / replace / remove└──┘
//! ```
//!
//! Once `Loaded`, the list is never replaced again: every later change is a local
//! mutation. All transitions here are synchronous and infallible apart from the state
//! checks; the actor decides *when* to apply them (after the remote call succeeded).

use crate::entity::CollectionEntity;
use crate::error::FrameworkError;

/// The reconciled list for one collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection<T> {
    /// Nothing fetched yet, or the initial fetch failed.
    Empty,
    /// Seeded by a full fetch; the sole source of truth from now on.
    Loaded(Vec<T>),
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection::Empty
    }
}

impl<T: CollectionEntity> Collection<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Collection::Loaded(_))
    }

    /// Number of entities held; zero while `Empty`.
    pub fn len(&self) -> usize {
        match self {
            Collection::Empty => 0,
            Collection::Loaded(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The current items, or `None` while `Empty`.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Collection::Empty => None,
            Collection::Loaded(items) => Some(items),
        }
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items()?.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    /// `Empty → Loaded`. A loaded collection is never re-seeded.
    pub fn load(&mut self, items: Vec<T>) -> Result<(), FrameworkError> {
        match self {
            Collection::Empty => {
                *self = Collection::Loaded(items);
                Ok(())
            }
            Collection::Loaded(_) => Err(FrameworkError::AlreadyLoaded),
        }
    }

    /// Prepend a newly created entity.
    pub fn insert_front(&mut self, item: T) -> Result<(), FrameworkError> {
        let items = self.loaded_mut()?;
        items.insert(0, item);
        Ok(())
    }

    /// Swap the entity with the same id for `item`, keeping its position.
    pub fn replace(&mut self, item: T) -> Result<(), FrameworkError> {
        let id = item.id();
        let items = self.loaded_mut()?;
        let slot = items
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        *slot = item;
        Ok(())
    }

    /// Drop the entity with `id`; the others keep their relative order.
    pub fn remove(&mut self, id: T::Id) -> Result<T, FrameworkError> {
        let items = self.loaded_mut()?;
        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        Ok(items.remove(index))
    }

    fn loaded_mut(&mut self) -> Result<&mut Vec<T>, FrameworkError> {
        match self {
            Collection::Empty => Err(FrameworkError::NotLoaded),
            Collection::Loaded(items) => Ok(items),
        }
    }
}
