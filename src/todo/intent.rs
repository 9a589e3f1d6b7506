use crate::mvi::Intent;
use crate::todo::state::{TodoId, TodoItem};

/// State-changing requests for the to-do list.
#[derive(Debug, Clone)]
pub enum TodoIntent {
    /// Append `item` to the end of the list.
    Create { item: TodoItem },
    /// Drop the item with `id`. No-op when the id is unknown.
    Remove { id: TodoId },
    /// Replace the text of the item with `id`. No-op when unknown.
    /// Non-emptiness is the dispatcher's responsibility, not the reducer's.
    Rename { id: TodoId, text: String },
    /// Replace the completion flag of the item with `id`. No-op when unknown.
    SetComplete { id: TodoId, complete: bool },
}

impl Intent for TodoIntent {}
