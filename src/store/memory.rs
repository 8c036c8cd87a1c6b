//! `Vec`-backed store.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use super::{CatalogStore, StoreError};
use crate::model::{Item, ItemId, NewItem};

/// Keeps items in insertion order with a name index for duplicate checks.
///
/// Ids come from a monotonic counter and are never reused, so re-creating a
/// deleted item yields a fresh id. Once `u32::MAX` has been handed out the
/// counter is exhausted and `create` fails instead of wrapping.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    items: Vec<Item>,
    name_index: HashMap<String, ItemId>,
    /// `None` once the id space is used up.
    next_id: Option<u32>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            name_index: HashMap::new(),
            next_id: Some(1),
        }
    }

    /// A store pre-populated with the demo catalog (ids 1 to 4).
    pub fn seeded() -> Self {
        let items = vec![
            Item::new(ItemId(1), "Laptop", 12_000_000),
            Item::new(ItemId(2), "Smartphone", 8_000_000),
            Item::new(ItemId(3), "Headphones", 200_000),
            Item::new(ItemId(4), "PS 4", 2_500_000),
        ];
        let name_index = items
            .iter()
            .map(|item| (item.name.clone(), item.id))
            .collect();
        Self {
            items,
            name_index,
            next_id: Some(5),
        }
    }

    /// Builds a store from existing records. The id counter resumes after the
    /// largest id given.
    ///
    /// Names and ids must be unique; the first clash is reported as
    /// [`StoreError::Duplicate`] or [`StoreError::DuplicateId`].
    pub fn with_items(items: Vec<Item>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for item in items {
            store.insert_existing(item)?;
        }
        Ok(store)
    }

    fn insert_existing(&mut self, item: Item) -> Result<(), StoreError> {
        if self.name_index.contains_key(&item.name) {
            return Err(StoreError::Duplicate(item.name));
        }
        if self.items.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::DuplicateId(item.id));
        }
        self.next_id = match item.id.0.checked_add(1) {
            Some(after) => self.next_id.map(|next| next.max(after)),
            None => None,
        };
        self.name_index.insert(item.name.clone(), item.id);
        self.items.push(item);
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryStore {
    async fn create(&mut self, item: NewItem) -> Result<Item, StoreError> {
        if self.name_index.contains_key(&item.name) {
            return Err(StoreError::Duplicate(item.name));
        }
        let id = self
            .next_id
            .map(ItemId)
            .ok_or_else(|| StoreError::Backend("id space exhausted".to_string()))?;
        self.next_id = id.0.checked_add(1);

        let stored = Item::new(id, item.name, item.price);
        self.name_index.insert(stored.name.clone(), id);
        self.items.push(stored.clone());
        debug!(%id, size = self.items.len(), "Stored item");
        Ok(stored)
    }

    async fn delete_by_id(&mut self, id: ItemId) -> Result<Item, StoreError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = self.items.remove(position);
        self.name_index.remove(&removed.name);
        debug!(%id, size = self.items.len(), "Removed item");
        Ok(removed)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, StoreError> {
        let found = self
            .name_index
            .get(name)
            .and_then(|id| self.items.iter().find(|item| item.id == *id))
            .cloned();
        Ok(found)
    }

    async fn search(&self, query: &str) -> Result<Vec<Item>, StoreError> {
        let hits = self
            .items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(query))
            .cloned()
            .collect();
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store_assigns_next_id() {
        let mut store = InMemoryStore::seeded();
        assert_eq!(store.len(), 4);

        let created = store.create(NewItem::new("Tablet", 5_000_000)).await.unwrap();
        assert_eq!(created.id, ItemId(5));
    }

    #[tokio::test]
    async fn test_with_items_resumes_after_largest_id() {
        let mut store = InMemoryStore::with_items(vec![
            Item::new(ItemId(10), "Console", 4_000_000),
            Item::new(ItemId(2), "Camera", 6_000_000),
        ])
        .unwrap();
        assert_eq!(store.items()[0].name, "Console");

        let created = store.create(NewItem::new("Monitor", 3_000_000)).await.unwrap();
        assert_eq!(created.id, ItemId(11));
        assert_eq!(
            store.items().iter().map(|item| item.id).collect::<Vec<_>>(),
            vec![ItemId(10), ItemId(2), ItemId(11)]
        );
    }

    #[test]
    fn test_with_items_rejects_duplicates() {
        let same_name = InMemoryStore::with_items(vec![
            Item::new(ItemId(1), "Laptop", 1),
            Item::new(ItemId(2), "Laptop", 2),
        ]);
        assert_eq!(
            same_name.unwrap_err(),
            StoreError::Duplicate("Laptop".to_string())
        );

        let same_id = InMemoryStore::with_items(vec![
            Item::new(ItemId(1), "Laptop", 1),
            Item::new(ItemId(1), "Tablet", 2),
        ]);
        assert_eq!(same_id.unwrap_err(), StoreError::DuplicateId(ItemId(1)));
    }

    #[tokio::test]
    async fn test_max_id_exhausts_counter() {
        let mut store =
            InMemoryStore::with_items(vec![Item::new(ItemId(u32::MAX), "Big", 1)]).unwrap();
        assert_eq!(
            store.create(NewItem::new("Bigger", 2)).await,
            Err(StoreError::Backend("id space exhausted".to_string()))
        );
        assert_eq!(store.len(), 1);
        assert!(store.find_by_name("Bigger").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_last_id_is_handed_out_once() {
        let mut store =
            InMemoryStore::with_items(vec![Item::new(ItemId(u32::MAX - 1), "Almost", 1)])
                .unwrap();
        let last = store.create(NewItem::new("Last", 2)).await.unwrap();
        assert_eq!(last.id, ItemId(u32::MAX));

        assert_eq!(
            store.create(NewItem::new("One more", 3)).await,
            Err(StoreError::Backend("id space exhausted".to_string()))
        );
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let mut store = InMemoryStore::seeded();
        let removed = store.delete_by_id(ItemId(4)).await.unwrap();
        assert_eq!(removed.name, "PS 4");

        let again = store.create(removed.to_new_item()).await.unwrap();
        assert_eq!(again.id, ItemId(5));
        assert_eq!(again.name, "PS 4");
    }

    #[tokio::test]
    async fn test_delete_missing_item() {
        let mut store = InMemoryStore::new();
        assert_eq!(
            store.delete_by_id(ItemId(9)).await,
            Err(StoreError::NotFound(ItemId(9)))
        );
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let mut store = InMemoryStore::seeded();
        let result = store.create(NewItem::new("Laptop", 1)).await;
        assert_eq!(result, Err(StoreError::Duplicate("Laptop".to_string())));
        assert_eq!(store.len(), 4);
    }

    #[tokio::test]
    async fn test_find_by_name_tracks_deletes() {
        let mut store = InMemoryStore::seeded();
        assert!(store.find_by_name("Smartphone").await.unwrap().is_some());
        store.delete_by_id(ItemId(2)).await.unwrap();
        assert!(store.find_by_name("Smartphone").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_matches_substring() {
        let store = InMemoryStore::seeded();
        let hits = store.search("phone").await.unwrap();
        let names: Vec<_> = hits.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Smartphone", "Headphones"]);

        assert_eq!(store.search("").await.unwrap().len(), 4);
        assert!(store.search("xbox").await.unwrap().is_empty());
    }
}
