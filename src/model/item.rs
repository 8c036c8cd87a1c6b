/// Represents a record in the catalog.
///
/// The store owns the canonical copy. The recent-items ring and the undo stack
/// keep their own clones, so deleting or re-creating the canonical record never
/// rewrites history that was already captured.
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: u64,
}

impl Item {
    /// Creates a new Item instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the store)
    /// * `name` - Display name, must be non-empty
    /// * `price` - Price in the smallest currency unit
    pub fn new(id: ItemId, name: impl Into<String>, price: u64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Strips the id, yielding the payload needed to create this item again.
    pub fn to_new_item(&self) -> NewItem {
        NewItem {
            name: self.name.clone(),
            price: self.price,
        }
    }
}

/// Payload for adding an item. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: u64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_new_item_drops_id() {
        let item = Item::new(ItemId(3), "Headphones", 200_000);
        assert_eq!(item.to_new_item(), NewItem::new("Headphones", 200_000));
    }

    #[test]
    fn test_item_id_display_is_bare_number() {
        assert_eq!(ItemId(42).to_string(), "42");
    }
}
