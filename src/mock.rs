//! # Mock Framework
//!
//! Utilities for testing the catalog in isolation.
//!
//! | Tool | Replaces | Use Case |
//! |------|----------|----------|
//! | [`MockStore`] | a real [`CatalogStore`] | Driving the actor and asserting which store calls it makes |
//! | [`create_mock_client`] | a running actor | Testing client code against hand-written replies |
//!
//! ## MockStore
//!
//! Queue expectations in the order the store will be called, hand a clone of
//! the mock to the actor, then check [`MockStore::calls`] and
//! [`MockStore::verify`]:
//!
//! ```rust
//! use catalog_service::mock::{MockStore, StoreCall};
//! use catalog_service::model::{Item, ItemId};
//! use catalog_service::store::CatalogStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::new();
//!     mock.expect_delete(ItemId(1))
//!         .return_ok(Item::new(ItemId(1), "Laptop", 12_000_000));
//!
//!     let mut store = mock.clone();
//!     let removed = store.delete_by_id(ItemId(1)).await.unwrap();
//!     assert_eq!(removed.name, "Laptop");
//!
//!     assert_eq!(mock.calls(), vec![StoreCall::DeleteById(ItemId(1))]);
//!     mock.verify();
//! }
//! ```
//!
//! Calling the mock with no matching expectation panics, failing the test.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::catalog_actor::{CatalogError, CatalogRequest, UndoOutcome};
use crate::clients::CatalogClient;
use crate::model::{Item, ItemId, NewItem};
use crate::store::{CatalogStore, StoreError};

// =============================================================================
// MOCK STORE
// =============================================================================

enum Expectation {
    Create {
        response: Result<Item, StoreError>,
    },
    DeleteById {
        id: ItemId,
        response: Result<Item, StoreError>,
    },
    FindByName {
        name: String,
        response: Result<Option<Item>, StoreError>,
    },
    Search {
        response: Result<Vec<Item>, StoreError>,
    },
}

/// A store call as observed by [`MockStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Create(NewItem),
    DeleteById(ItemId),
    FindByName(String),
    Search(String),
}

/// An expectation-driven [`CatalogStore`]. Clones share state.
#[derive(Clone, Default)]
pub struct MockStore {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<Item> {
        ExpectationBuilder::new(self, |response| Expectation::Create { response })
    }

    pub fn expect_delete(&mut self, id: ItemId) -> ExpectationBuilder<Item> {
        ExpectationBuilder::new(self, move |response| Expectation::DeleteById { id, response })
    }

    pub fn expect_find_by_name(
        &mut self,
        name: impl Into<String>,
    ) -> ExpectationBuilder<Option<Item>> {
        let name = name.into();
        ExpectationBuilder::new(self, move |response| Expectation::FindByName { name, response })
    }

    pub fn expect_search(&mut self) -> ExpectationBuilder<Vec<Item>> {
        ExpectationBuilder::new(self, |response| Expectation::Search { response })
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self, call: StoreCall) -> Expectation {
        self.calls.lock().unwrap().push(call.clone());
        self.expectations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected store call: {:?}", call))
    }
}

/// Builder for a single queued store response.
pub struct ExpectationBuilder<T> {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    build: Box<dyn FnOnce(Result<T, StoreError>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    fn new(
        mock: &MockStore,
        build: impl FnOnce(Result<T, StoreError>) -> Expectation + Send + 'static,
    ) -> Self {
        Self {
            expectations: mock.expectations.clone(),
            build: Box::new(build),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, StoreError>) {
        let expectation = (self.build)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[async_trait]
impl CatalogStore for MockStore {
    async fn create(&mut self, item: NewItem) -> Result<Item, StoreError> {
        match self.next(StoreCall::Create(item)) {
            Expectation::Create { response } => response,
            _ => panic!("Expectation mismatch: got create"),
        }
    }

    async fn delete_by_id(&mut self, id: ItemId) -> Result<Item, StoreError> {
        match self.next(StoreCall::DeleteById(id)) {
            Expectation::DeleteById { id: expected, response } => {
                assert_eq!(id, expected, "delete_by_id called with unexpected id");
                response
            }
            _ => panic!("Expectation mismatch: got delete_by_id({})", id),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, StoreError> {
        match self.next(StoreCall::FindByName(name.to_string())) {
            Expectation::FindByName { name: expected, response } => {
                assert_eq!(name, expected, "find_by_name called with unexpected name");
                response
            }
            _ => panic!("Expectation mismatch: got find_by_name({})", name),
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<Item>, StoreError> {
        match self.next(StoreCall::Search(query.to_string())) {
            Expectation::Search { response } => response,
            _ => panic!("Expectation mismatch: got search({})", query),
        }
    }
}

// =============================================================================
// CLIENT HELPERS
// =============================================================================

/// Creates a client wired to a receiver the test controls.
///
/// Nothing answers the client's requests until the test pulls them off the
/// receiver (see the `expect_*` helpers) and replies on the enclosed sender.
pub fn create_mock_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

type Responder<T> = oneshot::Sender<Result<T, CatalogError>>;

/// Helper to verify that the next message is an Add request
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(NewItem, Responder<Item>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Add { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(ItemId, Responder<Item>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Undo request
pub async fn expect_undo(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<Responder<UndoOutcome>> {
    match receiver.recv().await {
        Some(CatalogRequest::Undo { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_store_records_calls_in_order() {
        let mut mock = MockStore::new();
        mock.expect_find_by_name("Tablet").return_ok(None);
        mock.expect_create()
            .return_ok(Item::new(ItemId(5), "Tablet", 5_000_000));

        let mut store = mock.clone();
        assert_eq!(store.find_by_name("Tablet").await, Ok(None));
        let created = store.create(NewItem::new("Tablet", 5_000_000)).await.unwrap();
        assert_eq!(created.id, ItemId(5));

        assert_eq!(
            mock.calls(),
            vec![
                StoreCall::FindByName("Tablet".to_string()),
                StoreCall::Create(NewItem::new("Tablet", 5_000_000)),
            ]
        );
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_fails_with_pending_expectations() {
        let mut mock = MockStore::new();
        mock.expect_search().return_ok(vec![]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_add() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task =
            tokio::spawn(async move { client.add_item(NewItem::new("Tablet", 5_000_000)).await });

        let (item, responder) = expect_add(&mut receiver)
            .await
            .expect("Expected Add request");
        assert_eq!(item.name, "Tablet");
        responder
            .send(Ok(Item::new(ItemId(5), "Tablet", 5_000_000)))
            .unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result.unwrap().id, ItemId(5));
    }
}
