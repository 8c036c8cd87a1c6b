//! # Catalog Actor
//!
//! The single owner of catalog state. It holds the store, the recent-items
//! ring, the undo stack and the activity log, and processes
//! [`CatalogRequest`]s one at a time. Nothing else can reach that state, so
//! none of it needs a lock.
//!
//! Every mutating handler follows the same order: call the store first, and
//! only on success touch the history structures. A failed store call leaves
//! ring, stack and log exactly as they were.

use std::num::NonZeroUsize;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::message::{CatalogRequest, UndoOutcome};
use super::CatalogError;
use crate::clients::CatalogClient;
use crate::history::{ActivityLog, InverseOp, RecentItemsRing, UndoAction, UndoStack};
use crate::model::{Item, ItemId, NewItem};
use crate::store::CatalogStore;

pub struct CatalogActor<S: CatalogStore> {
    receiver: mpsc::Receiver<CatalogRequest>,
    store: S,
    recent: RecentItemsRing<Item>,
    undo_stack: UndoStack,
    activity: ActivityLog,
}

impl<S: CatalogStore> CatalogActor<S> {
    /// Creates a new `CatalogActor` and its associated `CatalogClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `store` - The store this actor will own.
    /// * `recent_capacity` - How many accepted items the ring keeps.
    pub fn new(
        buffer_size: usize,
        store: S,
        recent_capacity: NonZeroUsize,
    ) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            recent: RecentItemsRing::new(recent_capacity),
            undo_stack: UndoStack::new(),
            activity: ActivityLog::new(),
        };
        (actor, CatalogClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        info!(capacity = self.recent.capacity().get(), "Catalog actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::Search { query, respond_to } => {
                    let _ = respond_to.send(self.search(query).await);
                }
                CatalogRequest::Add { item, respond_to } => {
                    let _ = respond_to.send(self.add(item).await);
                }
                CatalogRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.delete(id).await);
                }
                CatalogRequest::Undo { respond_to } => {
                    let _ = respond_to.send(self.undo().await);
                }
                CatalogRequest::RecentItems { respond_to } => {
                    let _ = respond_to.send(Ok(self.recent.snapshot()));
                }
                CatalogRequest::ActivityLog { respond_to } => {
                    let _ = respond_to.send(Ok(self.activity.entries()));
                }
            }
        }

        info!(
            pending_undo = self.undo_stack.len(),
            activity = self.activity.len(),
            "Shutdown"
        );
    }

    async fn search(&mut self, query: String) -> Result<Vec<Item>, CatalogError> {
        let query = query.to_lowercase();
        let hits = self.store.search(&query).await?;
        debug!(%query, hits = hits.len(), "Search");
        self.activity.record(format!("Search query: {}", query));
        Ok(hits)
    }

    async fn add(&mut self, item: NewItem) -> Result<Item, CatalogError> {
        debug!(?item, "Add");
        if item.name.trim().is_empty() {
            warn!("Rejected item with blank name");
            return Err(CatalogError::InvalidItem("name must not be empty".to_string()));
        }
        if self.store.find_by_name(&item.name).await?.is_some() {
            warn!(name = %item.name, "Duplicate");
            return Err(CatalogError::Duplicate(item.name));
        }

        let stored = self.store.create(item).await.map_err(|e| {
            warn!(error = %e, "Create failed");
            e
        })?;

        self.undo_stack.push(UndoAction::Add(stored.clone()));
        if let Some(evicted) = self.recent.enqueue(stored.clone()) {
            debug!(id = %evicted.id, "Evicted from recent items");
        }
        self.activity.record(format!("Added item: {}", stored.name));
        info!(id = %stored.id, name = %stored.name, "Added");
        Ok(stored)
    }

    async fn delete(&mut self, id: ItemId) -> Result<Item, CatalogError> {
        debug!(%id, "Delete");
        let removed = self.store.delete_by_id(id).await.map_err(|e| {
            warn!(%id, error = %e, "Delete failed");
            e
        })?;

        self.undo_stack.push(UndoAction::Delete(removed.clone()));
        self.activity.record(format!("Deleted item ID: {}", id));
        info!(%id, name = %removed.name, "Deleted");
        Ok(removed)
    }

    /// Pops the newest action and applies its inverse. The action is consumed
    /// even when the store rejects the inverse.
    async fn undo(&mut self) -> Result<UndoOutcome, CatalogError> {
        let action = self.undo_stack.pop_last().map_err(|e| {
            debug!("Undo requested on empty stack");
            CatalogError::from(e)
        })?;
        debug!(%action, remaining = self.undo_stack.len(), "Undo popped");

        let applied = match action.inverse() {
            InverseOp::DeleteById(id) => {
                self.store.delete_by_id(id).await.map(UndoOutcome::Removed)
            }
            InverseOp::Create(item) => self.store.create(item).await.map(UndoOutcome::Restored),
        };

        match applied {
            Ok(outcome) => {
                self.activity
                    .record(format!("Undo {}: {}", action.kind(), action.item().name));
                info!(%action, "Undo applied");
                Ok(outcome)
            }
            Err(source) => {
                warn!(%action, error = %source, "Undo failed, action discarded");
                self.activity.record(format!("Undo failed: {}", action));
                Err(CatalogError::UndoApplyFailed { action, source })
            }
        }
    }
}
