//! Base trait for state in the MVI architecture.

/// Marker trait for state objects owned by a [`super::Store`].
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
