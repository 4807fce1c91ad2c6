//! Binding a [`View`] to a [`Store`].
//!
//! A [`Binder`] derives a view's properties from the store state through a
//! selector, builds the view's action handlers once from a [`Dispatcher`],
//! and re-renders the view after a state change only when the derived
//! properties differ under [`ShallowEq`].

mod shallow;

pub use shallow::ShallowEq;

use std::cell::RefCell;
use std::convert::Infallible;
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};

use crate::error::SelectorError;
use crate::mvi::Reducer;
use crate::store::{Commit, Dispatcher, Store, Subscription};
use crate::view::View;

struct Connected<V: View> {
    view: V,
    props: V::Props,
    renders: u64,
}

impl<V: View> Connected<V>
where
    V::Props: ShallowEq,
{
    /// Returns true if the view was re-rendered.
    fn update(&mut self, props: V::Props, handlers: &V::Handlers) -> bool {
        if self.props.shallow_eq(&props) {
            return false;
        }
        self.props = props;
        self.view.render(&self.props, handlers);
        self.renders += 1;
        true
    }
}

struct Shared<V: View> {
    connected: ReentrantMutex<RefCell<Connected<V>>>,
    /// Latest props not yet applied because the view was in use.
    pending: Mutex<Option<V::Props>>,
}

impl<V: View> Shared<V>
where
    V::Props: ShallowEq,
{
    fn apply(&self, props: V::Props, handlers: &V::Handlers) {
        *self.pending.lock() = Some(props);
        self.flush(handlers);
    }

    /// Apply pending props unless the view is in use. Whoever is using it
    /// flushes once done, so pending props are never stranded.
    fn flush(&self, handlers: &V::Handlers) {
        loop {
            let Some(guard) = self.connected.try_lock() else {
                return;
            };
            // Borrowed further up this thread's stack.
            let Ok(mut connected) = guard.try_borrow_mut() else {
                return;
            };
            let pending = self.pending.lock().take();
            match pending {
                Some(props) => {
                    if connected.update(props, handlers) {
                        tracing::debug!("View re-rendered");
                    }
                }
                None => {
                    drop(connected);
                    drop(guard);
                    // Props may have arrived while the lock was held.
                    if self.pending.lock().is_none() {
                        return;
                    }
                }
            }
        }
    }

    fn read<T>(&self, handlers: &V::Handlers, f: impl FnOnce(&Connected<V>) -> T) -> T {
        let out = {
            let guard = self.connected.lock();
            let connected = guard.borrow();
            f(&connected)
        };
        self.flush(handlers);
        out
    }
}

/// A view connected to a store.
///
/// The subscription lives exactly as long as the binder: dropping it (or
/// calling [`disconnect`](Binder::disconnect)) stops all further renders.
pub struct Binder<V: View> {
    shared: Arc<Shared<V>>,
    handlers: Arc<V::Handlers>,
    subscription: Subscription,
}

impl<V> Binder<V>
where
    V: View,
    V::Props: ShallowEq + Send + 'static,
    V::Handlers: Send + Sync + 'static,
{
    /// Connect `view` to `store`.
    ///
    /// `select` derives the view's properties from the state; `bind` builds
    /// its handlers from a dispatcher. The view is rendered once before this
    /// returns.
    pub fn connect<R, Sel, Bind>(store: &Store<R>, view: V, select: Sel, bind: Bind) -> Self
    where
        R: Reducer,
        Sel: Fn(&R::State) -> V::Props + Send + Sync + 'static,
        Bind: FnOnce(Dispatcher<R>) -> V::Handlers,
    {
        let mounted = Self::mount(
            store,
            view,
            move |state: &R::State| Ok::<_, Infallible>(select(state)),
            move |dispatcher| Ok(bind(dispatcher)),
        );
        match mounted {
            Ok(binder) => binder,
            Err(never) => match never {},
        }
    }

    /// Connect with a selector and binder that may fail.
    ///
    /// Once connected, a selector failure cancels the dispatch that caused
    /// it: the store keeps its previous state.
    ///
    /// # Errors
    ///
    /// Returns the first [`SelectorError`] raised while mounting. Nothing
    /// stays subscribed in that case.
    pub fn try_connect<R, Sel, Bind>(
        store: &Store<R>,
        view: V,
        select: Sel,
        bind: Bind,
    ) -> Result<Self, SelectorError>
    where
        R: Reducer,
        Sel: Fn(&R::State) -> Result<V::Props, SelectorError> + Send + Sync + 'static,
        Bind: FnOnce(Dispatcher<R>) -> Result<V::Handlers, SelectorError>,
    {
        Self::mount(store, view, select, bind)
    }

    fn mount<R, Sel, Bind, E>(store: &Store<R>, mut view: V, select: Sel, bind: Bind) -> Result<Self, E>
    where
        R: Reducer,
        Sel: Fn(&R::State) -> Result<V::Props, E> + Send + Sync + 'static,
        Bind: FnOnce(Dispatcher<R>) -> Result<V::Handlers, E>,
        E: Into<SelectorError>,
    {
        let handlers = Arc::new(bind(store.dispatcher())?);
        let mounted_state = store.get_state();
        let props = select(&*mounted_state)?;
        view.render(&props, &handlers);

        let shared = Arc::new(Shared {
            connected: ReentrantMutex::new(RefCell::new(Connected {
                view,
                props,
                renders: 1,
            })),
            pending: Mutex::new(None),
        });
        let select = Arc::new(select);

        let subscription = store.subscribe_staged({
            let shared = Arc::clone(&shared);
            let handlers = Arc::clone(&handlers);
            let select = Arc::clone(&select);
            move |state: &Arc<R::State>| {
                let props = match (*select)(&**state) {
                    Ok(props) => props,
                    Err(err) => return Err(err.into()),
                };
                let shared = Arc::clone(&shared);
                let handlers = Arc::clone(&handlers);
                Ok(Commit::new(move || shared.apply(props, &handlers)))
            }
        });

        let binder = Self {
            shared,
            handlers,
            subscription,
        };

        // The first render may have dispatched before the subscription existed.
        let latest = store.get_state();
        if !Arc::ptr_eq(&mounted_state, &latest) {
            let props = (*select)(&*latest)?;
            binder.shared.apply(props, &binder.handlers);
        }

        tracing::trace!(subscription = binder.subscription.id(), "View connected");
        Ok(binder)
    }

    /// The handlers built for the view.
    pub fn handlers(&self) -> &V::Handlers {
        &self.handlers
    }

    /// The most recently rendered properties.
    pub fn props(&self) -> V::Props
    where
        V::Props: Clone,
    {
        self.shared.read(&self.handlers, |connected| connected.props.clone())
    }

    /// Borrow the view, e.g. to draw its retained output.
    ///
    /// Handlers may be called from `f`. Renders they cause are held back and
    /// applied once `f` returns.
    pub fn with_view<T>(&self, f: impl FnOnce(&V) -> T) -> T {
        self.shared.read(&self.handlers, |connected| f(&connected.view))
    }

    /// How many times the view has been rendered, the initial render included.
    pub fn render_count(&self) -> u64 {
        self.shared.read(&self.handlers, |connected| connected.renders)
    }

    pub fn is_connected(&self) -> bool {
        self.subscription.is_active()
    }

    /// Stop receiving state changes. Idempotent.
    pub fn disconnect(&self) {
        self.subscription.unsubscribe();
    }
}
