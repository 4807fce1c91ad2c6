//! Base trait for store state.

/// Marker trait for state held by a [`Store`](crate::store::Store).
///
/// States should be:
/// - Immutable (the store replaces the whole value, never mutates it)
/// - Self-contained (all data selectors need to derive view properties)
/// - Comparable (PartialEq for checking reducer determinism)
pub trait StoreState: Clone + PartialEq + Send + Sync + 'static {}
