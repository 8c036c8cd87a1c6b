//! Error types for the Catalog actor.

use thiserror::Error;

use crate::history::{UndoAction, UndoError};
use crate::store::StoreError;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The submitted item failed validation (e.g. blank name).
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// An item with the same name is already in the catalog.
    #[error("Duplicate item: {0}")]
    Duplicate(String),

    /// Undo was requested with nothing recorded.
    #[error("Nothing to undo")]
    EmptyStack,

    /// The store rejected the inverse of a popped action. The action is no
    /// longer on the stack; it is handed back here so the caller still has the item.
    #[error("Undo of {action} failed: {source}")]
    UndoApplyFailed {
        action: UndoAction,
        #[source]
        source: StoreError,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Catalog actor closed")]
    ActorClosed,

    #[error("Catalog actor dropped response channel")]
    ActorDropped,
}

impl From<UndoError> for CatalogError {
    fn from(e: UndoError) -> Self {
        match e {
            UndoError::EmptyStack => CatalogError::EmptyStack,
        }
    }
}
