//! Actions for the counter feature.

use serde::{Deserialize, Serialize};

use crate::mvi::Action;

/// Actions that can be dispatched to the counter reducer.
///
/// Serialized as `{"kind": "INCREMENT_BY", "payload": 5}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAction {
    Increment,
    Decrement,
    IncrementBy(i64),
    Reset,
    /// Button press from the view; the payload is stored as `result`.
    SimpleAction(String),
}

impl Action for CounterAction {
    const KINDS: &'static [&'static str] = &[
        "INCREMENT",
        "DECREMENT",
        "INCREMENT_BY",
        "RESET",
        "SIMPLE_ACTION",
    ];

    fn kind(&self) -> &'static str {
        match self {
            CounterAction::Increment => "INCREMENT",
            CounterAction::Decrement => "DECREMENT",
            CounterAction::IncrementBy(_) => "INCREMENT_BY",
            CounterAction::Reset => "RESET",
            CounterAction::SimpleAction(_) => "SIMPLE_ACTION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidActionError;
    use crate::mvi::RawAction;

    #[test]
    fn kind_matches_serialized_tag() {
        let actions = [
            CounterAction::Increment,
            CounterAction::Decrement,
            CounterAction::IncrementBy(2),
            CounterAction::Reset,
            CounterAction::SimpleAction("x".into()),
        ];
        for action in actions {
            let raw = action.to_raw().unwrap();
            assert_eq!(raw.kind, action.kind());
            assert!(CounterAction::KINDS.contains(&raw.kind.as_str()));
        }
    }

    #[test]
    fn unit_kind_has_no_payload() {
        let raw = CounterAction::Increment.to_raw().unwrap();
        assert_eq!(raw, RawAction::new("INCREMENT"));
    }

    #[test]
    fn from_raw_decodes_payload() {
        let raw = RawAction::new("INCREMENT_BY").with_payload(serde_json::json!(5));
        assert_eq!(
            CounterAction::from_raw(raw).unwrap(),
            Some(CounterAction::IncrementBy(5))
        );
    }

    #[test]
    fn from_raw_unknown_kind_is_none() {
        assert_eq!(CounterAction::from_raw(RawAction::new("UNKNOWN")).unwrap(), None);
    }

    #[test]
    fn from_raw_blank_kind_fails() {
        let err = CounterAction::from_raw(RawAction::new("  ")).unwrap_err();
        assert!(matches!(err, InvalidActionError::MissingKind));
    }

    #[test]
    fn from_raw_missing_payload_fails() {
        let err = CounterAction::from_raw(RawAction::new("INCREMENT_BY")).unwrap_err();
        assert!(matches!(err, InvalidActionError::MalformedPayload { ref kind, .. } if kind == "INCREMENT_BY"));
    }
}
