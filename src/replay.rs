//! Feeding recorded actions into a store.
//!
//! A replay file is a JSON array of action envelopes:
//!
//! ```json
//! [{"kind": "INCREMENT"}, {"kind": "INCREMENT_BY", "payload": 5}]
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::StoreError;
use crate::mvi::{RawAction, Reducer};
use crate::store::Store;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError<E: std::error::Error + Send + Sync + 'static> {
    #[error("Failed to read replay file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse replay file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Action at `index` (zero-based) failed; earlier actions stay applied.
    #[error("action #{index} ('{kind}') failed: {source}")]
    Dispatch {
        index: usize,
        kind: String,
        #[source]
        source: StoreError<E>,
    },
}

/// Outcome of a successful replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Actions dispatched.
    pub applied: usize,
    /// Actions that replaced the state.
    pub changes: usize,
}

pub fn load_actions<E>(path: &Path) -> Result<Vec<RawAction>, ReplayError<E>>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let content = std::fs::read_to_string(path).map_err(|source| ReplayError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ReplayError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Dispatch `actions` in order, stopping at the first failure.
pub fn replay<R: Reducer>(
    store: &Store<R>,
    actions: Vec<RawAction>,
) -> Result<ReplaySummary, ReplayError<R::Error>> {
    let changes = Arc::new(AtomicUsize::new(0));
    let _subscription = store.subscribe({
        let changes = Arc::clone(&changes);
        move |_| {
            changes.fetch_add(1, Ordering::Relaxed);
        }
    });

    let mut applied = 0;
    for (index, action) in actions.into_iter().enumerate() {
        let kind = action.kind.clone();
        store
            .dispatch_raw(action)
            .map_err(|source| ReplayError::Dispatch {
                index,
                kind,
                source,
            })?;
        applied += 1;
    }

    let summary = ReplaySummary {
        applied,
        changes: changes.load(Ordering::Relaxed),
    };
    tracing::info!(applied = summary.applied, changes = summary.changes, "Replay finished");
    Ok(summary)
}
