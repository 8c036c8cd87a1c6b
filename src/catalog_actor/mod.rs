//! # Catalog Actor
//!
//! Owns the catalog's store and history, reachable only through
//! [`CatalogClient`](crate::clients::CatalogClient).
//!
//! ## Structure
//!
//! - [`actor`] - [`CatalogActor`], the message loop and the handlers
//! - [`message`] - [`CatalogRequest`] and [`UndoOutcome`]
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use catalog_service::catalog_actor;
//! use catalog_service::model::NewItem;
//! use catalog_service::store::InMemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = catalog_actor::new(InMemoryStore::seeded());
//!     tokio::spawn(actor.run());
//!
//!     let added = client.add_item(NewItem::new("Tablet", 5_000_000)).await?;
//!     client.undo().await?;
//!     assert!(client.search("tablet").await?.is_empty());
//!     assert_eq!(client.recent_items().await?, vec![added]);
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod error;
pub mod message;

pub use actor::*;
pub use error::*;
pub use message::*;

use crate::clients::CatalogClient;
use crate::history::DEFAULT_RECENT_CAPACITY;
use crate::store::CatalogStore;

/// Creates a new Catalog actor and its client with default sizing.
pub fn new<S: CatalogStore>(store: S) -> (CatalogActor<S>, CatalogClient) {
    CatalogActor::new(32, store, DEFAULT_RECENT_CAPACITY)
}
