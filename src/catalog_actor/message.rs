//! # Catalog Messages
//!
//! Requests sent from [`CatalogClient`](crate::clients::CatalogClient) to the
//! [`CatalogActor`](super::CatalogActor). Each carries a oneshot sender for the reply.

use tokio::sync::oneshot;

use super::CatalogError;
use crate::model::{Item, ItemId, NewItem};

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, CatalogError>>;

/// What a successful undo did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// An earlier add was reverted; this is the item that was removed.
    Removed(Item),
    /// An earlier delete was reverted; this is the re-created item, which
    /// carries whatever id the store assigned.
    Restored(Item),
}

#[derive(Debug)]
pub enum CatalogRequest {
    Search {
        query: String,
        respond_to: Response<Vec<Item>>,
    },
    Add {
        item: NewItem,
        respond_to: Response<Item>,
    },
    Delete {
        id: ItemId,
        respond_to: Response<Item>,
    },
    Undo {
        respond_to: Response<UndoOutcome>,
    },
    RecentItems {
        respond_to: Response<Vec<Item>>,
    },
    ActivityLog {
        respond_to: Response<Vec<String>>,
    },
}
