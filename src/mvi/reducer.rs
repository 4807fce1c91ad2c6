//! Reducer trait for the store.

use std::sync::Arc;

use super::action::Action;
use super::state::StoreState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State
pub trait Reducer: 'static {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Rejection error. Use [`std::convert::Infallible`] for total reducers.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Process an action and return the next state.
    ///
    /// This should be a pure function with no side effects. When the action
    /// leaves the state unchanged, return `Arc::clone(state)` so the store
    /// can skip notifying subscribers.
    fn reduce(
        state: &Arc<Self::State>,
        action: Self::Action,
    ) -> Result<Arc<Self::State>, Self::Error>;
}
