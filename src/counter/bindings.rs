//! Selector and action handlers connecting a view to the counter store.

use serde::Serialize;

use crate::error::StoreError;
use crate::store::Dispatcher;

use super::action::CounterAction;
use super::reducer::{CounterError, CounterReducer};
use super::state::CounterState;

/// Payload the view's button sends with SIMPLE_ACTION.
pub const SIMPLE_ACTION_RESULT: &str = "result_of_simple_action";

/// Properties a counter view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterProps {
    pub count: i64,
    pub result: Option<String>,
}

crate::shallow_props!(CounterProps { count, result });

/// Select the named subset of the state the view is allowed to see.
pub fn select_props(state: &CounterState) -> CounterProps {
    CounterProps {
        count: state.count,
        result: state.result.clone(),
    }
}

type DispatchResult = Result<(), StoreError<CounterError>>;

/// Handlers a counter view calls to emit actions.
#[derive(Clone)]
pub struct CounterHandlers {
    dispatcher: Dispatcher<CounterReducer>,
    step: i64,
}

/// Build handlers over `dispatcher`. `step` is the amount
/// [`increment`](CounterHandlers::increment) and
/// [`decrement`](CounterHandlers::decrement) move the counter by.
pub fn bind_handlers(dispatcher: Dispatcher<CounterReducer>, step: i64) -> CounterHandlers {
    CounterHandlers { dispatcher, step }
}

impl CounterHandlers {
    pub fn increment(&self) -> DispatchResult {
        self.dispatcher.dispatch(self.step_action(self.step))
    }

    pub fn decrement(&self) -> DispatchResult {
        let delta = self
            .step
            .checked_neg()
            .ok_or(StoreError::Reducer(CounterError::StepOutOfRange { step: self.step }))?;
        self.dispatcher.dispatch(self.step_action(delta))
    }

    pub fn reset(&self) -> DispatchResult {
        self.dispatcher.dispatch(CounterAction::Reset)
    }

    pub fn simple_action(&self) -> DispatchResult {
        self.dispatcher
            .dispatch(CounterAction::SimpleAction(SIMPLE_ACTION_RESULT.to_string()))
    }

    fn step_action(&self, delta: i64) -> CounterAction {
        match delta {
            1 => CounterAction::Increment,
            -1 => CounterAction::Decrement,
            delta => CounterAction::IncrementBy(delta),
        }
    }
}
