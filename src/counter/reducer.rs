//! Reducer for the counter feature.

use std::sync::Arc;

use crate::mvi::Reducer;

use super::action::CounterAction;
use super::state::CounterState;

/// Rejections raised by [`CounterReducer`] and the counter handlers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CounterError {
    #[error("counter overflow: {count} + {delta}")]
    Overflow { count: i64, delta: i64 },

    /// The handlers' step has no negation, so it cannot be subtracted.
    #[error("step {step} cannot be negated")]
    StepOutOfRange { step: i64 },
}

/// Reducer for counter state transitions.
///
/// Pure function. Actions that change nothing hand back the same `Arc`.
pub struct CounterReducer;

impl CounterReducer {
    fn add(state: &Arc<CounterState>, delta: i64) -> Result<Arc<CounterState>, CounterError> {
        if delta == 0 {
            return Ok(Arc::clone(state));
        }
        let count = state
            .count
            .checked_add(delta)
            .ok_or(CounterError::Overflow {
                count: state.count,
                delta,
            })?;
        Ok(Arc::new(CounterState {
            count,
            ..CounterState::clone(state)
        }))
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Error = CounterError;

    fn reduce(
        state: &Arc<CounterState>,
        action: CounterAction,
    ) -> Result<Arc<CounterState>, CounterError> {
        match action {
            CounterAction::Increment => Self::add(state, 1),
            CounterAction::Decrement => Self::add(state, -1),
            CounterAction::IncrementBy(delta) => Self::add(state, delta),
            CounterAction::Reset => {
                if state.is_pristine() {
                    Ok(Arc::clone(state))
                } else {
                    Ok(Arc::new(CounterState::default()))
                }
            }
            CounterAction::SimpleAction(result) => {
                if state.result.as_deref() == Some(result.as_str()) {
                    return Ok(Arc::clone(state));
                }
                Ok(Arc::new(CounterState {
                    result: Some(result),
                    ..CounterState::clone(state)
                }))
            }
        }
    }
}
