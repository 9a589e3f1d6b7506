use crate::mvi::UiState;
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a to-do item.
///
/// Assigned once at creation, immutable thereafter, and the sole
/// lookup/equality key for items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(Uuid);

impl TodoId {
    pub fn new(raw: Uuid) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One entry in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub complete: bool,
}

impl TodoItem {
    /// A fresh, not-yet-completed item.
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            complete: false,
        }
    }
}

/// Ordered list of to-do items.
///
/// Insertion order is display order. `text` carries no uniqueness
/// constraint; `id` is unique at all times (the reducer rejects a create
/// that would duplicate one).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl UiState for TodoList {}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// How many items are marked complete.
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.complete).count()
    }

    pub(crate) fn push(&mut self, item: TodoItem) {
        self.items.push(item);
    }

    pub(crate) fn remove(&mut self, id: TodoId) {
        self.items.retain(|item| item.id != id);
    }

    pub(crate) fn get_mut(&mut self, id: TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

impl FromIterator<TodoItem> for TodoList {
    fn from_iter<I: IntoIterator<Item = TodoItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
