//! Counter feature module.
//!
//! The demo domain wired through the store: a counter plus the result of the
//! "simple action" fired by the view's button.
//!
//! # Architecture
//!
//! - `state.rs` - Counter state
//! - `action.rs` - Actions (INCREMENT, DECREMENT, INCREMENT_BY, RESET, SIMPLE_ACTION)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `bindings.rs` - Selector and handlers connecting a view to the store

mod action;
mod bindings;
mod reducer;
mod state;

pub use action::CounterAction;
pub use bindings::{bind_handlers, select_props, CounterHandlers, CounterProps, SIMPLE_ACTION_RESULT};
pub use reducer::{CounterError, CounterReducer};
pub use state::CounterState;

/// Store specialised for the counter domain.
pub type CounterStore = crate::store::Store<CounterReducer>;
