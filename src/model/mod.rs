//! Pure data structures shared by the store, the history structures and the clients.

pub mod item;

pub use item::*;
