//! To-do domain: data model, intents, and the transition function.

mod id;
mod intent;
mod reducer;
mod state;

pub use id::{IdAllocator, SequentialAllocator, UuidAllocator};
pub use intent::TodoIntent;
pub use reducer::TodoReducer;
pub use state::{TodoId, TodoItem, TodoList};
