//! Typed fan-out channels backing the toolbar relay.

use std::sync::{Arc, RwLock};

/// Callback held by an [`EventChannel`].
pub type Listener<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Ordered broadcast channel for one toolbar event kind.
///
/// Listeners run synchronously on the emitting thread, in registration
/// order. There is no replay: a listener only observes events emitted after
/// it subscribed. Registering the same closure twice yields two invocations
/// per event; deduplication is the caller's responsibility.
pub struct EventChannel<T> {
    listeners: Arc<RwLock<Vec<Listener<T>>>>,
}

impl<T> EventChannel<T> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a listener for every future event on this channel.
    ///
    /// There is no unregistration; the listener lives as long as the
    /// channel itself.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.listeners
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Arc::new(listener));
    }

    /// Deliver `payload` to every registered listener, in order.
    ///
    /// The listener list is snapshotted before the first invocation, so a
    /// listener may subscribe or emit again without deadlocking; listeners
    /// added mid-dispatch only observe later events. Emitting with no
    /// listeners is a no-op.
    pub fn emit(&self, payload: T)
    where
        T: Clone,
    {
        let snapshot: Vec<Listener<T>> = self
            .listeners
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();

        for listener in &snapshot {
            listener(payload.clone());
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl<T> Clone for EventChannel<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<T> Default for EventChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EventChannel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventChannel")
            .field("listener_count", &self.listener_count())
            .finish()
    }
}
