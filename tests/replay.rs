mod common;

use common::{counter_store, temp_replay};
use statelink::counter::{CounterError, CounterReducer};
use statelink::replay::{load_actions, replay, ReplayError, ReplaySummary};
use statelink::StoreError;

#[test]
fn test_replay_applies_actions_in_order() {
    let (_dir, path) = temp_replay(
        r#"[
            {"kind": "INCREMENT"},
            {"kind": "INCREMENT_BY", "payload": 10},
            {"kind": "DECREMENT"},
            {"kind": "SIMPLE_ACTION", "payload": "result_of_simple_action"}
        ]"#,
    );
    let store = counter_store(0);

    let actions = load_actions::<CounterError>(&path).unwrap();
    let summary = replay(&store, actions).unwrap();

    assert_eq!(
        summary,
        ReplaySummary {
            applied: 4,
            changes: 4
        }
    );
    let state = store.get_state();
    assert_eq!(state.count, 10);
    assert_eq!(state.result.as_deref(), Some("result_of_simple_action"));
}

#[test]
fn test_unknown_and_noop_actions_count_as_applied_not_changed() {
    let (_dir, path) = temp_replay(
        r#"[
            {"kind": "UNKNOWN"},
            {"kind": "RESET"},
            {"kind": "INCREMENT"}
        ]"#,
    );
    let store = counter_store(0);

    let summary = replay(&store, load_actions::<CounterError>(&path).unwrap()).unwrap();

    assert_eq!(summary.applied, 3);
    assert_eq!(summary.changes, 1);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn test_replay_stops_at_first_failure() {
    let (_dir, path) = temp_replay(
        r#"[
            {"kind": "INCREMENT"},
            {"kind": "INCREMENT_BY", "payload": "lots"},
            {"kind": "INCREMENT"}
        ]"#,
    );
    let store = counter_store(0);

    let err = replay(&store, load_actions::<CounterError>(&path).unwrap()).unwrap_err();

    match err {
        ReplayError::Dispatch {
            index,
            kind,
            source: StoreError::InvalidAction(_),
        } => {
            assert_eq!(index, 1);
            assert_eq!(kind, "INCREMENT_BY");
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(store.get_state().count, 1);
}

#[test]
fn test_reducer_rejection_reported_with_index() {
    let (_dir, path) = temp_replay(r#"[{"kind": "INCREMENT"}]"#);
    let store = counter_store(i64::MAX);

    let err = replay(&store, load_actions::<CounterError>(&path).unwrap()).unwrap_err();

    assert!(matches!(
        err,
        ReplayError::Dispatch {
            index: 0,
            source: StoreError::Reducer(CounterError::Overflow { .. }),
            ..
        }
    ));
}

#[test]
fn test_missing_file_is_read_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let err = load_actions::<CounterError>(&temp_dir.path().join("none.json")).unwrap_err();
    assert!(matches!(err, ReplayError::Read { .. }));
}

#[test]
fn test_not_an_array_is_parse_error() {
    let (_dir, path) = temp_replay(r#"{"kind": "INCREMENT"}"#);
    let err = load_actions::<CounterError>(&path).unwrap_err();
    assert!(matches!(err, ReplayError::Parse { .. }));
}

#[test]
fn test_replay_into_generic_store() {
    let store: statelink::Store<CounterReducer> = counter_store(3);
    let summary = replay(&store, Vec::new()).unwrap();
    assert_eq!(summary.applied, 0);
    assert_eq!(store.get_state().count, 3);
}
