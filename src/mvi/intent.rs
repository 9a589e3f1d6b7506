//! Base trait for intents (user actions) in the MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// An intent is a user-initiated request to change state, carrying only
/// the data needed to perform that change. Intents are processed by
/// reducers to produce new states. The `Debug` bound lets the store log
/// every dispatch.
pub trait Intent: Debug + Send + 'static {}
