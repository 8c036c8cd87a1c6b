//! # Catalog Client
//!
//! Provides a high-level API for interacting with the
//! [`CatalogActor`](crate::catalog_actor::CatalogActor). Every method sends one
//! [`CatalogRequest`] and awaits the reply on a oneshot channel.
//!
//! The client is cheap to clone (it only holds a sender) and can be handed to
//! as many tasks as needed; the actor serializes their requests.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::catalog_actor::{CatalogError, CatalogRequest, Response, UndoOutcome};
use crate::model::{Item, ItemId, NewItem};

/// Client for interacting with the Catalog actor.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> CatalogRequest,
    ) -> Result<T, CatalogError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| CatalogError::ActorClosed)?;
        response.await.map_err(|_| CatalogError::ActorDropped)?
    }

    /// Case-insensitive substring search over item names.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Item>, CatalogError> {
        debug!("Sending request");
        let query = query.to_string();
        self.request(|respond_to| CatalogRequest::Search { query, respond_to })
            .await
    }

    /// Adds an item; the returned record carries the id assigned by the store.
    #[instrument(skip(self))]
    pub async fn add_item(&self, item: NewItem) -> Result<Item, CatalogError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::Add { item, respond_to })
            .await
    }

    /// Deletes an item and returns the removed record.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> Result<Item, CatalogError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::Delete { id, respond_to })
            .await
    }

    /// Reverts the most recent add or delete.
    ///
    /// Returns [`CatalogError::EmptyStack`] when there is nothing to undo and
    /// [`CatalogError::UndoApplyFailed`] when the store rejects the inverse;
    /// in the latter case the action is gone for good.
    #[instrument(skip(self))]
    pub async fn undo(&self) -> Result<UndoOutcome, CatalogError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::Undo { respond_to })
            .await
    }

    /// The most recently added items, oldest first.
    #[instrument(skip(self))]
    pub async fn recent_items(&self) -> Result<Vec<Item>, CatalogError> {
        self.request(|respond_to| CatalogRequest::RecentItems { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn activity_log(&self) -> Result<Vec<String>, CatalogError> {
        self.request(|respond_to| CatalogRequest::ActivityLog { respond_to })
            .await
    }
}
