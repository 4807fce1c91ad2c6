//! Unidirectional data flow primitives.
//!
//! This module provides the base traits every store feature implements.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Binder ──→ View
//!    ↑                                         │
//!    └─────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable application state, shared as `Arc<S>` snapshots
//! - **Action**: User actions or system events, serializable as [`RawAction`]
//! - **Reducer**: Pure function that computes the next state from an action

mod action;
mod reducer;
mod state;

pub use action::{Action, RawAction};
pub use reducer::Reducer;
pub use state::StoreState;
