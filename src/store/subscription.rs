//! Subscription handles returned by [`Store::subscribe`](super::Store::subscribe).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

/// Something listeners can be removed from.
pub(crate) trait ListenerRegistry: Send + Sync {
    fn remove(&self, id: u64);
}

/// Registration of a listener with a store.
///
/// The listener stays registered for as long as this handle is alive.
/// [`unsubscribe`](Subscription::unsubscribe) removes it early; calling it
/// again, or dropping the handle afterwards, does nothing.
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription {
    id: u64,
    active: Arc<AtomicBool>,
    registry: Weak<dyn ListenerRegistry>,
}

impl Subscription {
    pub(crate) fn new(id: u64, active: Arc<AtomicBool>, registry: Weak<dyn ListenerRegistry>) -> Self {
        Self {
            id,
            active,
            registry,
        }
    }

    /// Identifier unique within the owning store.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// False once unsubscribed.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Remove the listener from the store. Idempotent.
    ///
    /// Takes effect immediately: if a notification is running, the listener
    /// is skipped unless it has already been called for it.
    pub fn unsubscribe(&self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(self.id);
        }
        tracing::trace!(subscription = self.id, "Unsubscribed");
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingRegistry {
        removed: Mutex<Vec<u64>>,
    }

    impl ListenerRegistry for RecordingRegistry {
        fn remove(&self, id: u64) {
            self.removed.lock().push(id);
        }
    }

    fn make(id: u64, registry: &Arc<RecordingRegistry>) -> Subscription {
        let weak: Weak<RecordingRegistry> = Arc::downgrade(registry);
        Subscription::new(id, Arc::new(AtomicBool::new(true)), weak)
    }

    #[test]
    fn unsubscribe_twice_removes_once() {
        let registry = Arc::new(RecordingRegistry::default());
        let sub = make(7, &registry);
        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_active());
        assert_eq!(*registry.removed.lock(), vec![7]);
    }

    #[test]
    fn drop_unsubscribes() {
        let registry = Arc::new(RecordingRegistry::default());
        drop(make(3, &registry));
        assert_eq!(*registry.removed.lock(), vec![3]);
    }

    #[test]
    fn drop_after_unsubscribe_is_noop() {
        let registry = Arc::new(RecordingRegistry::default());
        let sub = make(1, &registry);
        sub.unsubscribe();
        drop(sub);
        assert_eq!(registry.removed.lock().len(), 1);
    }

    #[test]
    fn unsubscribe_after_registry_gone_is_noop() {
        let registry = Arc::new(RecordingRegistry::default());
        let sub = make(2, &registry);
        drop(registry);
        sub.unsubscribe();
        assert!(!sub.is_active());
    }
}
