//! Typed send/receive surface over an optional dev transport.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::messages::HotMessage;
use crate::transport::DevTransport;

/// Handle toolbar apps use to talk to the dev server.
///
/// The transport is fixed at construction and never reconnects. Without
/// one (static preview, tests) every operation is a silent no-op, so
/// callers never branch on connectivity.
#[derive(Clone)]
pub struct ServerBridge {
    transport: Option<Arc<dyn DevTransport>>,
}

impl ServerBridge {
    pub fn new(transport: Option<Arc<dyn DevTransport>>) -> Self {
        Self { transport }
    }

    /// Bridge with no transport attached.
    pub fn disconnected() -> Self {
        Self { transport: None }
    }

    /// Whether a transport is attached.
    pub fn is_live(&self) -> bool {
        self.transport.is_some()
    }

    /// Send `payload` to the server under `event`.
    ///
    /// Does nothing without a transport. A payload that fails to serialize
    /// is logged and dropped; the caller is never surfaced an error.
    pub fn send<T: Serialize>(&self, event: &str, payload: &T) {
        let Some(transport) = &self.transport else {
            return;
        };

        match serde_json::to_value(payload) {
            Ok(value) => transport.send(HotMessage::new(event, value)),
            Err(e) => {
                tracing::warn!("Failed to serialize payload for '{}': {}", event, e);
            }
        }
    }

    /// Run `callback` for every server message named `event`.
    ///
    /// Does nothing without a transport. A payload that does not decode as
    /// `T` is logged and skipped; later messages still reach the callback.
    pub fn on<T, F>(&self, event: &str, callback: F)
    where
        T: DeserializeOwned,
        F: Fn(T) + Send + Sync + 'static,
    {
        let Some(transport) = &self.transport else {
            return;
        };

        let event_name = event.to_string();
        transport.on(
            event,
            Arc::new(move |value| match serde_json::from_value::<T>(value) {
                Ok(payload) => callback(payload),
                Err(e) => {
                    tracing::warn!("Failed to decode payload for '{}': {}", event_name, e);
                }
            }),
        );
    }
}

impl std::fmt::Debug for ServerBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerBridge")
            .field("live", &self.is_live())
            .finish()
    }
}
