//! A toolbar wired to its dev server.

use std::sync::Arc;

use relay::{ToolbarRelay, APP_TOGGLED};

use crate::bridge::ServerBridge;
use crate::transport::DevTransport;

/// Relay and server bridge for one toolbar instance.
///
/// App open/close announcements on the relay are forwarded to the server
/// under [`APP_TOGGLED`], so the dev server can track which app is in
/// front. Local relay listeners fire whether or not a transport exists.
#[derive(Clone, Debug)]
pub struct ToolbarSession {
    relay: ToolbarRelay,
    server: ServerBridge,
}

impl ToolbarSession {
    pub fn new(transport: Option<Arc<dyn DevTransport>>) -> Self {
        let relay = ToolbarRelay::new();
        let server = ServerBridge::new(transport);

        let report = server.clone();
        relay.on_app_toggled(move |payload| {
            report.send(APP_TOGGLED, &payload);
        });

        Self { relay, server }
    }

    /// Session with no dev server behind it.
    pub fn disconnected() -> Self {
        Self::new(None)
    }

    /// Event relay shared between the toolbar and its apps.
    pub fn events(&self) -> &ToolbarRelay {
        &self.relay
    }

    /// Bridge to the dev server.
    pub fn server(&self) -> &ServerBridge {
        &self.server
    }
}
