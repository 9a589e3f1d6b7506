//! Model-View-Intent (MVI) architecture primitives.
//!
//! Unidirectional data flow for the UI layer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable representation of canonical state
//! - **Intent**: user actions carrying only the data needed to apply them
//! - **Reducer**: pure function transforming state based on intents
//! - **Store**: owns the state, runs the reducer, notifies subscribers

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, Subscription};
