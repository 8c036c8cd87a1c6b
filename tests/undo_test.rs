use catalog_service::catalog_actor::{CatalogError, UndoOutcome};
use catalog_service::config::CatalogConfig;
use catalog_service::history::UndoAction;
use catalog_service::lifecycle::CatalogSystem;
use catalog_service::mock::{MockStore, StoreCall};
use catalog_service::model::{Item, ItemId, NewItem};
use catalog_service::store::StoreError;

/// Real catalog actor over a scripted store: undo of an add deletes by id.
#[tokio::test]
async fn test_undo_add_invokes_delete_by_id() {
    let laptop = Item::new(ItemId(1), "Laptop", 12_000_000);

    let mut store = MockStore::new();
    store.expect_find_by_name("Laptop").return_ok(None);
    store.expect_create().return_ok(laptop.clone());
    store.expect_delete(ItemId(1)).return_ok(laptop.clone());

    let system = CatalogSystem::with_store(CatalogConfig::default(), store.clone());
    let client = &system.catalog_client;

    client
        .add_item(NewItem::new("Laptop", 12_000_000))
        .await
        .unwrap();
    let outcome = client.undo().await.unwrap();
    assert_eq!(outcome, UndoOutcome::Removed(laptop));

    assert_eq!(
        store.calls(),
        vec![
            StoreCall::FindByName("Laptop".to_string()),
            StoreCall::Create(NewItem::new("Laptop", 12_000_000)),
            StoreCall::DeleteById(ItemId(1)),
        ]
    );
    store.verify();
    system.shutdown().await.unwrap();
}

/// Undo of a delete whose re-create fails: error surfaced once, entry dropped.
#[tokio::test]
async fn test_undo_delete_with_failing_create() {
    let headphones = Item::new(ItemId(3), "Headphones", 200_000);

    let mut store = MockStore::new();
    store.expect_delete(ItemId(3)).return_ok(headphones.clone());
    store
        .expect_create()
        .return_err(StoreError::Duplicate("Headphones".to_string()));

    let system = CatalogSystem::with_store(CatalogConfig::default(), store.clone());
    let client = &system.catalog_client;

    client.delete_item(ItemId(3)).await.unwrap();

    match client.undo().await {
        Err(CatalogError::UndoApplyFailed { action, source }) => {
            assert_eq!(action, UndoAction::Delete(headphones.clone()));
            assert_eq!(action.to_string(), "delete Headphones (id 3)");
            assert_eq!(source, StoreError::Duplicate("Headphones".to_string()));
        }
        other => panic!("Expected UndoApplyFailed, got {:?}", other),
    }

    // No retry and no requeue
    assert_eq!(client.undo().await, Err(CatalogError::EmptyStack));
    assert!(client.recent_items().await.unwrap().is_empty());
    assert_eq!(
        client.activity_log().await.unwrap(),
        vec![
            "Deleted item ID: 3",
            "Undo failed: delete Headphones (id 3)"
        ]
    );

    assert_eq!(
        store.calls(),
        vec![
            StoreCall::DeleteById(ItemId(3)),
            StoreCall::Create(NewItem::new("Headphones", 200_000)),
        ]
    );
    store.verify();
    system.shutdown().await.unwrap();
}

/// A failing create during add must not record anything.
#[tokio::test]
async fn test_add_with_failing_store() {
    let mut store = MockStore::new();
    store.expect_find_by_name("Tablet").return_ok(None);
    store
        .expect_create()
        .return_err(StoreError::Backend("connection reset".to_string()));

    let system = CatalogSystem::with_store(CatalogConfig::default(), store.clone());
    let client = &system.catalog_client;

    assert_eq!(
        client.add_item(NewItem::new("Tablet", 5_000_000)).await,
        Err(CatalogError::Store(StoreError::Backend(
            "connection reset".to_string()
        )))
    );
    assert!(client.recent_items().await.unwrap().is_empty());
    assert!(client.activity_log().await.unwrap().is_empty());
    assert_eq!(client.undo().await, Err(CatalogError::EmptyStack));

    store.verify();
    system.shutdown().await.unwrap();
}
