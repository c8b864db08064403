//! Transport between the toolbar and the dev server.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tokio::sync::mpsc;

use crate::messages::HotMessage;

/// Callback invoked with the raw payload of a matching message.
pub type HotCallback = Arc<dyn Fn(serde_json::Value) + Send + Sync>;

/// Message pipe the dev server exposes while it is running.
///
/// `send` is fire-and-forget: once a message is handed over, the caller
/// never hears about delivery again. `on` subscribes to every incoming
/// message carrying the given event name.
pub trait DevTransport: Send + Sync {
    fn send(&self, message: HotMessage);

    fn on(&self, event: &str, callback: HotCallback);
}

type HandlerMap = Arc<RwLock<HashMap<String, Vec<HotCallback>>>>;

/// One endpoint of an in-process transport pair.
///
/// Messages sent on an endpoint are dispatched, in send order, to the
/// callbacks registered on its peer. Cloning an endpoint shares its
/// handler table and send side.
#[derive(Clone)]
pub struct HotChannel {
    peer: mpsc::UnboundedSender<HotMessage>,
    handlers: HandlerMap,
}

/// Create a connected pair of transport endpoints.
///
/// Spawns one dispatch task per endpoint, so this must run inside a tokio
/// runtime. Each task exits once the opposite endpoint (and its clones)
/// are dropped.
pub fn hot_channel() -> (HotChannel, HotChannel) {
    let (left_tx, left_rx) = mpsc::unbounded_channel();
    let (right_tx, right_rx) = mpsc::unbounded_channel();

    let left = HotChannel {
        peer: right_tx,
        handlers: Arc::new(RwLock::new(HashMap::new())),
    };
    let right = HotChannel {
        peer: left_tx,
        handlers: Arc::new(RwLock::new(HashMap::new())),
    };

    tokio::spawn(dispatch(left_rx, Arc::clone(&left.handlers)));
    tokio::spawn(dispatch(right_rx, Arc::clone(&right.handlers)));

    (left, right)
}

async fn dispatch(mut rx: mpsc::UnboundedReceiver<HotMessage>, handlers: HandlerMap) {
    while let Some(message) = rx.recv().await {
        let snapshot: Vec<HotCallback> = {
            let handlers = handlers
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            handlers.get(&message.event).cloned().unwrap_or_default()
        };

        if snapshot.is_empty() {
            tracing::debug!("No handler for message '{}', dropping", message.event);
            continue;
        }

        for callback in &snapshot {
            callback(message.payload.clone());
        }
    }
}

impl DevTransport for HotChannel {
    fn send(&self, message: HotMessage) {
        let _ = self.peer.send(message);
    }

    fn on(&self, event: &str, callback: HotCallback) {
        self.handlers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .entry(event.to_string())
            .or_default()
            .push(callback);
    }
}

impl std::fmt::Debug for HotChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let handler_count: usize = self
            .handlers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .values()
            .map(Vec::len)
            .sum();
        f.debug_struct("HotChannel")
            .field("handler_count", &handler_count)
            .finish()
    }
}
