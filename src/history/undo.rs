//! Single-action undo.
//!
//! Every successful mutation records an [`UndoAction`] holding a copy of the
//! affected item. `undo` pops the newest one and asks the store to apply its
//! [`inverse`](UndoAction::inverse). A popped action is never pushed back,
//! whether or not the inverse succeeds.

use thiserror::Error;

use crate::model::{Item, ItemId, NewItem};

/// A recorded catalog mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoAction {
    /// An item was added. Undone by deleting it.
    Add(Item),
    /// An item was deleted. Undone by creating it again.
    Delete(Item),
}

/// The store operation that reverses an [`UndoAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InverseOp {
    DeleteById(ItemId),
    Create(NewItem),
}

impl UndoAction {
    pub fn item(&self) -> &Item {
        match self {
            UndoAction::Add(item) | UndoAction::Delete(item) => item,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            UndoAction::Add(_) => "add",
            UndoAction::Delete(_) => "delete",
        }
    }

    pub fn inverse(&self) -> InverseOp {
        match self {
            UndoAction::Add(item) => InverseOp::DeleteById(item.id),
            UndoAction::Delete(item) => InverseOp::Create(item.to_new_item()),
        }
    }
}

impl std::fmt::Display for UndoAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let item = self.item();
        write!(f, "{} {} (id {})", self.kind(), item.name, item.id)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UndoError {
    #[error("Nothing to undo")]
    EmptyStack,
}

/// Unbounded LIFO of [`UndoAction`]s.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    actions: Vec<UndoAction>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: UndoAction) {
        self.actions.push(action);
    }

    /// Removes and returns the most recently pushed action.
    pub fn pop_last(&mut self) -> Result<UndoAction, UndoError> {
        self.actions.pop().ok_or(UndoError::EmptyStack)
    }

    pub fn peek(&self) -> Option<&UndoAction> {
        self.actions.last()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
