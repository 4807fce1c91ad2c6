//! A state container binding views to a single application state.
//!
//! Actions are dispatched into a [`Store`](store::Store), which applies a
//! pure [`Reducer`](mvi::Reducer), replaces its state and notifies
//! subscribers in order. A [`Binder`](binder::Binder) connects a
//! [`View`](view::View) to a store, deriving the view's properties through a
//! selector and re-rendering it only when they change.

pub mod binder;
pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod replay;
pub mod store;
pub mod ui;
pub mod view;

pub use binder::{Binder, ShallowEq};
pub use error::{InvalidActionError, SelectorError, StoreError};
pub use mvi::{Action, RawAction, Reducer, StoreState};
pub use store::{Commit, Dispatcher, Store, Subscription};
pub use view::View;
