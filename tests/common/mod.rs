//! Shared test utilities and recording views.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use statelink::counter::{CounterHandlers, CounterProps, CounterState, CounterStore};
use statelink::View;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub type RenderLog = Arc<Mutex<Vec<CounterProps>>>;

/// Create a counter store starting at `count`.
pub fn counter_store(count: i64) -> CounterStore {
    CounterStore::new(CounterState::new(count))
}

/// A counter view that records every set of props it renders.
pub struct RecordingView {
    renders: RenderLog,
}

impl RecordingView {
    pub fn new() -> (Self, RenderLog) {
        let renders = RenderLog::default();
        (
            Self {
                renders: Arc::clone(&renders),
            },
            renders,
        )
    }
}

impl View for RecordingView {
    type Props = CounterProps;
    type Handlers = CounterHandlers;

    fn render(&mut self, props: &CounterProps, _handlers: &CounterHandlers) {
        self.renders.lock().push(props.clone());
    }
}

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Write `content` to a replay file inside a fresh temp dir.
pub fn temp_replay(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("actions.json");
    std::fs::write(&path, content).expect("Failed to write replay file");
    (temp_dir, path)
}
