//! # Catalog Store
//!
//! The persistence seam. The catalog actor owns exactly one [`CatalogStore`]
//! and is the only caller, so mutating methods take `&mut self` and no
//! implementation needs internal locking.
//!
//! - [`InMemoryStore`] - `Vec`-backed store seeded with the demo catalog
//! - [`MockStore`](crate::mock::MockStore) - expectation-driven store for tests

pub mod memory;

pub use memory::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Item, ItemId, NewItem};

/// Errors reported by a [`CatalogStore`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Item already exists: {0}")]
    Duplicate(String),

    #[error("Item id already in use: {0}")]
    DuplicateId(ItemId),

    /// Anything the backend could not classify (I/O, driver, constraint...).
    #[error("Store backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait CatalogStore: Send + Sync + 'static {
    /// Assigns an id, persists the item and returns the stored record.
    async fn create(&mut self, item: NewItem) -> Result<Item, StoreError>;

    /// Removes the item and returns the removed record.
    async fn delete_by_id(&mut self, id: ItemId) -> Result<Item, StoreError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, StoreError>;

    /// Case-insensitive substring search. `query` is already lowercased.
    async fn search(&self, query: &str) -> Result<Vec<Item>, StoreError>;
}
