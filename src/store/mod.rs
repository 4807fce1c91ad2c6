//! The state container.
//!
//! A [`Store`] owns the single state value of an application, applies
//! actions through a [`Reducer`] and notifies subscribers after every change.
//! Updates are strictly sequential: one transition (reduce, prepare, replace,
//! commit) completes before the next may begin.
//!
//! Notification runs in two phases. Every listener first prepares against
//! the candidate state and may fail with a [`SelectorError`]; only when all
//! of them succeed is the state replaced and their [`Commit`]s run.

mod subscription;

pub use subscription::Subscription;

use std::cell::Cell;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex, RwLock};

use crate::error::{SelectorError, StoreError};
use crate::mvi::{Action, RawAction, Reducer};
use subscription::ListenerRegistry;

/// Work a listener defers until the new state is committed.
#[must_use]
pub struct Commit(Option<Box<dyn FnOnce()>>);

impl Commit {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(f)))
    }

    /// Nothing to do on commit.
    pub fn none() -> Self {
        Self(None)
    }

    fn run(self) {
        if let Some(f) = self.0 {
            f();
        }
    }
}

type Listener<S> = dyn Fn(&Arc<S>) -> Result<Commit, SelectorError> + Send + Sync;

struct ListenerEntry<S> {
    id: u64,
    active: Arc<AtomicBool>,
    listener: Arc<Listener<S>>,
}

impl<S> Clone for ListenerEntry<S> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            active: Arc::clone(&self.active),
            listener: Arc::clone(&self.listener),
        }
    }
}

struct StoreInner<S> {
    state: RwLock<Arc<S>>,
    /// Kept in subscription order.
    listeners: Mutex<Vec<ListenerEntry<S>>>,
    /// Held for a whole transition. The flag is set while the owning thread
    /// is inside a transition, so only that thread can observe it.
    gate: ReentrantMutex<Cell<bool>>,
    next_id: AtomicU64,
}

impl<S: Send + Sync + 'static> StoreInner<S> {
    /// Ask every active listener to prepare for `candidate`.
    ///
    /// Stops at the first failure; nothing has been committed at that point.
    fn prepare(&self, candidate: &Arc<S>) -> Result<Vec<(Arc<AtomicBool>, Commit)>, SelectorError> {
        // Listeners may subscribe or unsubscribe while being notified,
        // so the list lock is not held across calls.
        let snapshot: Vec<ListenerEntry<S>> = self.listeners.lock().clone();
        let mut commits = Vec::with_capacity(snapshot.len());

        for entry in &snapshot {
            if !entry.active.load(Ordering::Acquire) {
                continue;
            }
            match (entry.listener)(candidate) {
                Ok(commit) => commits.push((Arc::clone(&entry.active), commit)),
                Err(err) => {
                    tracing::debug!(subscription = entry.id, error = %err, "Listener failed");
                    return Err(err);
                }
            }
        }
        Ok(commits)
    }
}

impl<S: Send + Sync + 'static> ListenerRegistry for StoreInner<S> {
    fn remove(&self, id: u64) {
        let removed = {
            let mut listeners = self.listeners.lock();
            listeners
                .iter()
                .position(|entry| entry.id == id)
                .map(|index| listeners.remove(index))
        };
        // Dropped outside the lock: a listener's captures may unsubscribe
        // other listeners when they go away.
        drop(removed);
    }
}

/// Owner of the application state.
///
/// Cloning a `Store` yields another handle to the same state; it does not
/// copy it.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial` as its state.
    pub fn new(initial: R::State) -> Self {
        Self::from_inner(Arc::new(StoreInner {
            state: RwLock::new(Arc::new(initial)),
            listeners: Mutex::new(Vec::new()),
            gate: ReentrantMutex::new(Cell::new(false)),
            next_id: AtomicU64::new(0),
        }))
    }

    fn from_inner(inner: Arc<StoreInner<R::State>>) -> Self {
        Self {
            inner,
            _reducer: PhantomData,
        }
    }

    /// Current state snapshot.
    pub fn get_state(&self) -> Arc<R::State> {
        Arc::clone(&self.inner.state.read())
    }

    /// Apply `action` and notify subscribers if the state changed.
    ///
    /// A dispatch from another thread waits until the one in flight has
    /// finished.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ReentrantDispatch`] if called from inside a transition
    ///   on the same thread (from a reducer or a listener).
    /// - [`StoreError::Reducer`] if the reducer rejects the action.
    /// - [`StoreError::Selector`] if a listener fails to prepare for the new
    ///   state. No listener has committed at that point.
    ///
    /// The state is untouched whenever an error is returned.
    pub fn dispatch(&self, action: R::Action) -> Result<(), StoreError<R::Error>> {
        let kind = action.kind();
        let inner = &self.inner;
        let gate = inner.gate.lock();
        if gate.replace(true) {
            tracing::warn!(kind, "Rejected re-entrant dispatch");
            return Err(StoreError::ReentrantDispatch);
        }
        scopeguard::defer! {
            gate.set(false);
        }

        let current = self.get_state();
        let next = R::reduce(&current, action).map_err(StoreError::Reducer)?;
        if Arc::ptr_eq(&current, &next) {
            tracing::debug!(kind, "State unchanged");
            return Ok(());
        }

        let commits = inner.prepare(&next)?;
        *inner.state.write() = next;
        tracing::debug!(kind, listeners = commits.len(), "State replaced");

        for (active, commit) in commits {
            // Unsubscribed by an earlier commit.
            if active.load(Ordering::Acquire) {
                commit.run();
            }
        }
        Ok(())
    }

    /// Decode a wire action and dispatch it.
    ///
    /// Kinds the action type does not recognize leave the state unchanged.
    pub fn dispatch_raw(&self, raw: RawAction) -> Result<(), StoreError<R::Error>> {
        let kind = raw.kind.clone();
        match R::Action::from_raw(raw)? {
            Some(action) => self.dispatch(action),
            None => {
                if self.inner.gate.lock().get() {
                    tracing::warn!(kind = %kind, "Rejected re-entrant dispatch");
                    return Err(StoreError::ReentrantDispatch);
                }
                tracing::debug!(kind = %kind, "Unknown action kind, state unchanged");
                Ok(())
            }
        }
    }

    /// Register a listener called after every state change.
    ///
    /// The listener runs once the new state is committed, so
    /// [`get_state`](Store::get_state) returns the state it was handed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Arc<R::State>) + Send + Sync + 'static,
    {
        let listener = Arc::new(listener);
        self.subscribe_staged(move |state| {
            let listener = Arc::clone(&listener);
            let state = Arc::clone(state);
            Ok(Commit::new(move || listener(&state)))
        })
    }

    /// Register a listener that prepares against the candidate state before
    /// it is committed.
    ///
    /// A [`SelectorError`] from `prepare` cancels the whole transition: the
    /// state stays as it was and no listener commits.
    pub fn subscribe_staged<F>(&self, prepare: F) -> Subscription
    where
        F: Fn(&Arc<R::State>) -> Result<Commit, SelectorError> + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let active = Arc::new(AtomicBool::new(true));
        self.inner.listeners.lock().push(ListenerEntry {
            id,
            active: Arc::clone(&active),
            listener: Arc::new(prepare),
        });
        tracing::trace!(subscription = id, "Subscribed");

        let registry: Weak<StoreInner<R::State>> = Arc::downgrade(&self.inner);
        Subscription::new(id, active, registry)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    /// A dispatch capability that does not keep the store alive.
    pub fn dispatcher(&self) -> Dispatcher<R> {
        Dispatcher {
            inner: Arc::downgrade(&self.inner),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("listeners", &self.listener_count())
            .field("dispatching", &self.inner.gate.is_locked())
            .finish()
    }
}

/// Dispatch capability handed to action binders.
///
/// Holds the store weakly: handlers live inside listeners the store owns.
pub struct Dispatcher<R: Reducer> {
    inner: Weak<StoreInner<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Dispatcher<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Dispatcher<R> {
    pub fn dispatch(&self, action: R::Action) -> Result<(), StoreError<R::Error>> {
        self.store()?.dispatch(action)
    }

    pub fn dispatch_raw(&self, raw: RawAction) -> Result<(), StoreError<R::Error>> {
        self.store()?.dispatch_raw(raw)
    }

    fn store(&self) -> Result<Store<R>, StoreError<R::Error>> {
        self.inner
            .upgrade()
            .map(Store::from_inner)
            .ok_or(StoreError::StoreDropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::convert::Infallible;

    #[derive(Debug, Clone, PartialEq)]
    struct Total(i64);

    impl crate::mvi::StoreState for Total {}

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
    enum TotalAction {
        Add(i64),
        Noop,
    }

    impl Action for TotalAction {
        const KINDS: &'static [&'static str] = &["ADD", "NOOP"];

        fn kind(&self) -> &'static str {
            match self {
                TotalAction::Add(_) => "ADD",
                TotalAction::Noop => "NOOP",
            }
        }
    }

    struct TotalReducer;

    impl Reducer for TotalReducer {
        type State = Total;
        type Action = TotalAction;
        type Error = Infallible;

        fn reduce(state: &Arc<Total>, action: TotalAction) -> Result<Arc<Total>, Infallible> {
            Ok(match action {
                TotalAction::Add(amount) => Arc::new(Total(state.0 + amount)),
                TotalAction::Noop => Arc::clone(state),
            })
        }
    }

    #[test]
    fn new_store_holds_initial_state() {
        let store = Store::<TotalReducer>::new(Total(5));
        assert_eq!(*store.get_state(), Total(5));
    }

    #[test]
    fn dispatch_replaces_state() {
        let store = Store::<TotalReducer>::new(Total(0));
        let before = store.get_state();
        store.dispatch(TotalAction::Add(2)).unwrap();
        assert_eq!(*store.get_state(), Total(2));
        // Old snapshots are never mutated.
        assert_eq!(*before, Total(0));
    }

    #[test]
    fn noop_keeps_same_snapshot() {
        let store = Store::<TotalReducer>::new(Total(1));
        let before = store.get_state();
        store.dispatch(TotalAction::Noop).unwrap();
        assert!(Arc::ptr_eq(&before, &store.get_state()));
    }

    #[test]
    fn clones_share_state() {
        let store = Store::<TotalReducer>::new(Total(0));
        let other = store.clone();
        other.dispatch(TotalAction::Add(3)).unwrap();
        assert_eq!(*store.get_state(), Total(3));
    }

    #[test]
    fn dropped_subscription_leaves_registry() {
        let store = Store::<TotalReducer>::new(Total(0));
        let sub = store.subscribe(|_| {});
        assert_eq!(store.listener_count(), 1);
        drop(sub);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn dispatcher_after_store_drop_fails() {
        let store = Store::<TotalReducer>::new(Total(0));
        let dispatcher = store.dispatcher();
        drop(store);
        assert!(matches!(
            dispatcher.dispatch(TotalAction::Add(1)),
            Err(StoreError::StoreDropped)
        ));
    }

    #[test]
    fn dispatch_raw_decodes_payload() {
        let store = Store::<TotalReducer>::new(Total(0));
        store
            .dispatch_raw(RawAction::new("ADD").with_payload(serde_json::json!(4)))
            .unwrap();
        assert_eq!(*store.get_state(), Total(4));
    }

    #[test]
    fn dispatch_raw_malformed_payload_fails() {
        let store = Store::<TotalReducer>::new(Total(0));
        let result = store.dispatch_raw(RawAction::new("ADD").with_payload(serde_json::json!("x")));
        assert!(matches!(
            result,
            Err(StoreError::InvalidAction(
                crate::error::InvalidActionError::MalformedPayload { .. }
            ))
        ));
        assert_eq!(*store.get_state(), Total(0));
    }
}
