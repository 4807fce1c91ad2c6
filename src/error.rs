//! Crate-level error types for dispatching actions and deriving view properties.

/// Error returned when an action envelope cannot be turned into a typed action.
#[derive(Debug, thiserror::Error)]
pub enum InvalidActionError {
    /// The envelope has no `kind`, or it is blank.
    #[error("action has no kind")]
    MissingKind,

    /// The kind is known but its payload has the wrong shape.
    #[error("malformed payload for action '{kind}': {source}")]
    MalformedPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// The envelope itself is not valid JSON of the expected shape.
    #[error("invalid action envelope: {0}")]
    Json(#[source] serde_json::Error),
}

/// Error raised by a selector or an action binder while deriving view properties.
#[derive(Debug, thiserror::Error)]
#[error("selector failed: {message}")]
pub struct SelectorError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl SelectorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error, keeping it as the `source()`.
    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::convert::Infallible> for SelectorError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

/// Error returned by [`Store::dispatch`](crate::store::Store::dispatch) and
/// [`Binder::connect`](crate::binder::Binder::connect).
///
/// Generic over `E`, the reducer's rejection error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError<E: std::error::Error + Send + Sync + 'static> {
    /// The action envelope was malformed.
    #[error(transparent)]
    InvalidAction(#[from] InvalidActionError),

    /// A dispatch was attempted while another was still in flight on the
    /// same thread.
    ///
    /// Raised when a reducer or a listener notified by a dispatch tries to
    /// dispatch again. Dispatches from other threads wait instead.
    #[error("dispatch attempted while another dispatch is in flight")]
    ReentrantDispatch,

    /// A selector failed while deriving properties. The transition was
    /// cancelled and the state is unchanged.
    #[error(transparent)]
    Selector(#[from] SelectorError),

    /// The reducer rejected the action.
    #[error(transparent)]
    Reducer(E),

    /// The store behind a dispatcher no longer exists.
    #[error("store has been dropped")]
    StoreDropped,
}
