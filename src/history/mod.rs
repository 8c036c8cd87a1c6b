//! # In-Memory History
//!
//! The bookkeeping the catalog keeps next to its store:
//!
//! - [`RecentItemsRing`] - the last K items that were accepted by `add_item`
//! - [`UndoStack`] - reversible [`UndoAction`]s, popped once each by `undo`
//! - [`ActivityLog`] - human-readable trail of what the catalog did
//!
//! None of these types do any I/O or locking. They are owned by the catalog
//! actor and only touched from its message loop.

pub mod activity;
pub mod ring;
pub mod undo;

pub use activity::*;
pub use ring::*;
pub use undo::*;
