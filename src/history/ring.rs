//! Bounded FIFO of recently accepted items.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::model::Item;

/// Default number of items kept by the catalog's ring.
pub const DEFAULT_RECENT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Fixed-capacity FIFO that evicts its oldest entry on overflow.
///
/// Entries are held by value, front is oldest, back is newest.
#[derive(Debug, Clone)]
pub struct RecentItemsRing<T = Item> {
    items: VecDeque<T>,
    capacity: NonZeroUsize,
}

impl<T: Clone> RecentItemsRing<T> {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Appends `item` at the back, evicting the front first when full.
    ///
    /// Returns the evicted entry, if any.
    pub fn enqueue(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() >= self.capacity.get() {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    /// Copies the current contents, oldest to newest.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }
}

impl Default for RecentItemsRing<Item> {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_CAPACITY)
    }
}
