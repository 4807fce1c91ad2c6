//! Contract for presentation units driven by a [`Binder`](crate::binder::Binder).

/// Something that renders given properties.
///
/// A view never sees the store. It receives the properties derived for it
/// and the handlers it may call to emit actions; anything else it needs must
/// come through those two values.
pub trait View: Send + 'static {
    /// Properties derived from the store state.
    type Props;

    /// Bound action handlers.
    type Handlers;

    /// Update the view for new properties.
    fn render(&mut self, props: &Self::Props, handlers: &Self::Handlers);
}
