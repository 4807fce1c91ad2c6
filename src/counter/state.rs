//! State for the counter feature.

use serde::{Deserialize, Serialize};

use crate::mvi::StoreState;

/// Counter application state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    #[serde(default)]
    pub count: i64,
    /// Payload of the last SIMPLE_ACTION.
    #[serde(default)]
    pub result: Option<String>,
}

impl StoreState for CounterState {}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self {
            count,
            result: None,
        }
    }

    /// True if RESET would not change anything.
    pub fn is_pristine(&self) -> bool {
        self.count == 0 && self.result.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pristine() {
        assert!(CounterState::default().is_pristine());
    }

    #[test]
    fn nonzero_count_is_not_pristine() {
        assert!(!CounterState::new(2).is_pristine());
    }

    #[test]
    fn deserializes_without_result() {
        let state: CounterState = serde_json::from_str(r#"{"count": 4}"#).unwrap();
        assert_eq!(state, CounterState::new(4));
    }
}
