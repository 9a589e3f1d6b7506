use crate::todo::state::TodoId;
use uuid::Uuid;

/// Source of fresh item identifiers.
///
/// The view draws one id per created item. The only hard requirement is
/// no collision within the list's lifetime; the allocator is injected so
/// tests can use deterministic ids.
pub trait IdAllocator {
    fn next_id(&mut self) -> TodoId;
}

/// Production allocator: random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidAllocator;

impl IdAllocator for UuidAllocator {
    fn next_id(&mut self) -> TodoId {
        TodoId::new(Uuid::new_v4())
    }
}

/// Counting allocator for deterministic ids in tests.
#[derive(Debug)]
pub struct SequentialAllocator {
    next: u128,
}

impl SequentialAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator for SequentialAllocator {
    fn next_id(&mut self) -> TodoId {
        let id = TodoId::new(Uuid::from_u128(self.next));
        self.next += 1;
        id
    }
}
